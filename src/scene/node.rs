use std::sync::{
    Arc,
    RwLock
};
use kiss3d::nalgebra::{
    Point3,
    Similarity3,
    Translation3,
    UnitQuaternion,
    Vector3
};
use crate::error::{
    Result,
    TrailError
};
use super::Tracked;
// deeper ancestor chains are treated as a parent cycle
pub const MAX_DEPTH: usize = 256;
#[derive(Debug)]
pub struct Node {
    name: String,
    translation: Vector3<f32>,
    rotation: UnitQuaternion<f32>,
    scale: f32,
    spin: Vector3<f32>,
    parent: Option<Arc<RwLock<Node>>>
}
impl Node {
    pub fn new(name: String, translation: [f32; 3]) -> Node {
        Node {
            name,
            translation: Vector3::new(translation[0], translation[1], translation[2]),
            rotation: UnitQuaternion::identity(),
            scale: 1.0,
            spin: Vector3::zeros(),
            parent: None
        }
    }
    pub fn with_parent(mut self, parent: Arc<RwLock<Node>>) -> Node {
        self.parent = Some(parent);
        self
    }
    pub fn with_spin(mut self, spin: [f32; 3]) -> Node {
        self.spin = Vector3::new(spin[0], spin[1], spin[2]);
        self
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_translation(&mut self, translation: [f32; 3]) {
        self.translation = Vector3::new(translation[0], translation[1], translation[2]);
    }
    pub fn translate(&mut self, delta: [f32; 3]) {
        self.translation += Vector3::new(delta[0], delta[1], delta[2]);
    }
    pub fn rotate(&mut self, scaled_axis: [f32; 3]) {
        let delta = UnitQuaternion::from_scaled_axis(Vector3::new(scaled_axis[0], scaled_axis[1], scaled_axis[2]));
        self.rotation = delta * self.rotation;
    }
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }
    pub fn set_parent(&mut self, parent: Option<Arc<RwLock<Node>>>) {
        self.parent = parent;
    }
    pub fn update(&mut self, delta_time: f32) {
        if self.spin != Vector3::zeros() {
            self.rotation = UnitQuaternion::from_scaled_axis(self.spin * delta_time) * self.rotation;
        }
    }
    pub fn local_transformation(&self) -> Similarity3<f32> {
        Similarity3::from_parts(Translation3::from(self.translation), self.rotation, self.scale)
    }
    pub fn world_transformation(&self) -> Result<Similarity3<f32>> {
        let mut transformation = self.local_transformation();
        let mut next = self.parent.clone();
        let mut depth = 0;
        while let Some(parent) = next {
            depth += 1;
            if depth > MAX_DEPTH {
                return Err(TrailError::resolution(format!(
                    "{} has more than {} ancestors, is there a parent cycle?", self.name, MAX_DEPTH
                )));
            }
            let lock = parent.read()
                .map_err(|x| TrailError::resolution(format!("Ancestor of {} is poisoned!\n{}", self.name, x)))?;
            transformation = lock.local_transformation() * transformation;
            next = lock.parent.clone();
        }
        Ok(transformation)
    }
}
impl Tracked for Node {
    fn local_position(&self) -> Result<Point3<f32>> {
        Ok(Point3::from(self.translation))
    }
    fn world_position(&self) -> Result<Point3<f32>> {
        Ok(self.world_transformation()? * Point3::origin())
    }
}
impl Tracked for RwLock<Node> {
    fn local_position(&self) -> Result<Point3<f32>> {
        self.read()
            .map_err(|x| TrailError::resolution(format!("Target node is poisoned!\n{}", x)))?
            .local_position()
    }
    fn world_position(&self) -> Result<Point3<f32>> {
        self.read()
            .map_err(|x| TrailError::resolution(format!("Target node is poisoned!\n{}", x)))?
            .world_position()
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use std::f32::consts::FRAC_PI_2;
    use float_eq::assert_float_eq;
    fn coordinates(point: Point3<f32>) -> [f32; 3] {
        [point.x, point.y, point.z]
    }
    #[test]
    fn root_world_equals_local() {
        let node = Node::new("root".to_string(), [1.0, 2.0, 3.0]);
        assert_eq!(coordinates(node.world_position().unwrap()), [1.0, 2.0, 3.0]);
        assert_eq!(coordinates(node.local_position().unwrap()), [1.0, 2.0, 3.0]);
    }
    #[test]
    fn world_composes_ancestors() {
        let grandparent = Arc::new(RwLock::new(Node::new("grandparent".to_string(), [10.0, 0.0, 0.0])));
        let parent = Arc::new(RwLock::new(
            Node::new("parent".to_string(), [0.0, 0.0, 0.0]).with_parent(grandparent.clone())
        ));
        parent.write().unwrap().rotate([0.0, 0.0, FRAC_PI_2]);
        parent.write().unwrap().set_scale(2.0);
        let child = Node::new("child".to_string(), [1.0, 0.0, 0.0]).with_parent(parent);
        assert_float_eq!(coordinates(child.world_position().unwrap()), [10.0, 2.0, 0.0], abs <= [1e-5; 3]);
        assert_eq!(coordinates(child.local_position().unwrap()), [1.0, 0.0, 0.0]);
    }
    #[test]
    fn spin_rotates_over_time() {
        let spinner = Arc::new(RwLock::new(
            Node::new("spinner".to_string(), [0.0, 0.0, 0.0]).with_spin([0.0, FRAC_PI_2, 0.0])
        ));
        spinner.write().unwrap().update(1.0);
        let child = Node::new("child".to_string(), [1.0, 0.0, 0.0]).with_parent(spinner);
        assert_float_eq!(coordinates(child.world_position().unwrap()), [0.0, 0.0, -1.0], abs <= [1e-5; 3]);
    }
    #[test]
    fn parent_cycle_is_reported() {
        let a = Arc::new(RwLock::new(Node::new("a".to_string(), [0.0, 0.0, 0.0])));
        let b = Arc::new(RwLock::new(Node::new("b".to_string(), [0.0, 0.0, 0.0]).with_parent(a.clone())));
        a.write().unwrap().set_parent(Some(b.clone()));
        let child = Node::new("child".to_string(), [0.0, 0.0, 0.0]).with_parent(b);
        match child.world_position() {
            Err(TrailError::Resolution(_)) => (),
            x => panic!("unexpected {:?}", x)
        }
        a.write().unwrap().set_parent(None);
    }
}
