pub mod node;
use std::sync::{
    Arc,
    RwLock
};
use kiss3d::nalgebra::Point3;
use crate::error::{
    Result,
    TrailError
};
use node::Node;
/// Pose queries a trail makes of the object it follows; never mutated.
pub trait Tracked {
    fn local_position(&self) -> Result<Point3<f32>>;
    fn world_position(&self) -> Result<Point3<f32>>;
}
#[derive(Debug, Default)]
pub struct Scene {
    object: Vec<Arc<RwLock<Node>>>
}
impl Scene {
    pub fn new() -> Scene {
        Scene {
            object: Vec::new()
        }
    }
    pub fn add(&mut self, node: Node) -> Arc<RwLock<Node>> {
        let node = Arc::new(RwLock::new(node));
        self.object.push(node.clone());
        node
    }
    pub fn add_child(&mut self, parent: usize, node: Node) -> Result<Arc<RwLock<Node>>> {
        let parent = self.object_from_index(parent)
            .ok_or_else(|| TrailError::resolution(format!("No parent node at index {}", parent)))?;
        Ok(self.add(node.with_parent(parent)))
    }
    pub fn size(&self) -> usize {
        self.object.len()
    }
    pub fn object_from_index(&self, index: usize) -> Option<Arc<RwLock<Node>>> {
        self.object.get(index).cloned()
    }
    pub fn step(&mut self, delta_time: f32) -> Result<()> {
        for a in self.object.iter() {
            a.write()
                .map_err(|x| TrailError::resolution(format!("Scene node is poisoned!\n{}", x)))?
                .update(delta_time);
        }
        Ok(())
    }
}
