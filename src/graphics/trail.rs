use std::sync::Arc;
use kiss3d::{
    nalgebra::Point3,
    window::Window
};
use log::{
    debug,
    warn
};
use crate::{
    error::{
        Result,
        TrailError
    },
    history::{
        settings::TrailSettings,
        PositionHistory
    },
    scene::Tracked
};
use super::{
    material::TrailMaterial,
    mesh_line::{
        MeshLine,
        TrailGeometry
    }
};
type Attenuation = Box<dyn Fn(f32) -> f32>;
pub struct Trail<T: Tracked + ?Sized> {
    history: PositionHistory<T>,
    geometry: MeshLine,
    material: TrailMaterial,
    attenuation: Option<Attenuation>
}
impl<T: Tracked + ?Sized> Trail<T> {
    pub fn new(settings: &TrailSettings, target: Option<Arc<T>>, viewport: (u32, u32)) -> Result<Trail<T>> {
        let mut history = PositionHistory::new(settings)?;
        history.initialize(target, settings.length, settings.local)?;
        let mut material = TrailMaterial::new(settings.width, settings.color, viewport.0, viewport.1);
        material.set_size_attenuation(settings.size_attenuation);
        Ok(Trail {
            history,
            geometry: MeshLine::new(),
            material,
            attenuation: None
        })
    }
    pub fn with_attenuation<F: Fn(f32) -> f32 + 'static>(mut self, attenuation: F) -> Trail<T> {
        self.attenuation = Some(Box::new(attenuation));
        self
    }
    pub fn with_material(mut self, material: TrailMaterial) -> Trail<T> {
        self.material = material;
        self
    }
    pub fn update(&mut self) -> Result<()> {
        self.history.sample()?;
        if let Some(points) = self.history.as_slice() {
            self.geometry.set_points(points, self.attenuation.as_deref());
        }
        Ok(())
    }
    pub fn on_target_changed(&mut self, target: Option<Arc<T>>) -> Result<()> {
        self.history.on_target_changed(target)
    }
    pub fn on_length_changed(&mut self, length: f32) -> Result<()> {
        self.history.on_length_changed(length).map_err(log_rejection)
    }
    pub fn on_decay_changed(&mut self, decay: f32) -> Result<()> {
        self.history.set_decay(decay).map_err(log_rejection)
    }
    pub fn on_local_changed(&mut self, local: bool) {
        self.history.set_local(local);
    }
    pub fn on_viewport_resized(&mut self, width_px: u32, height_px: u32) {
        debug!("Trail viewport resized to {}x{}", width_px, height_px);
        self.material.set_resolution(width_px, height_px);
    }
    pub fn set_width(&mut self, width: f32) -> Result<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(log_rejection(TrailError::invalid(format!("width must be positive, got {}", width))));
        }
        self.material.set_width(width);
        Ok(())
    }
    pub fn set_color(&mut self, color: [f32; 3]) {
        self.material.set_color(color);
    }
    pub fn draw(&self, window: &mut Window, eye: &Point3<f32>, fov: f32) {
        let distance = match self.geometry.positions().last() {
            Some(x) => (x - eye).norm(),
            None => return
        };
        self.geometry.draw(window, eye, self.material.world_width(distance, fov), self.material.color());
    }
    pub fn history(&self) -> &PositionHistory<T> {
        &self.history
    }
    pub fn geometry(&self) -> &MeshLine {
        &self.geometry
    }
    pub fn material(&self) -> &TrailMaterial {
        &self.material
    }
    pub fn material_mut(&mut self) -> &mut TrailMaterial {
        &mut self.material
    }
}
fn log_rejection(error: TrailError) -> TrailError {
    warn!("{}", error);
    error
}
#[cfg(test)]
mod test {
    use super::*;
    use std::{
        f32::consts::FRAC_PI_2,
        sync::RwLock
    };
    use float_eq::assert_float_eq;
    use crate::scene::node::Node;
    fn coordinates(point: &Point3<f32>) -> [f32; 3] {
        [point.x, point.y, point.z]
    }
    #[test]
    fn geometry_follows_history() {
        let target = Arc::new(RwLock::new(Node::new("target".to_string(), [0.0, 0.0, 0.0])));
        let mut trail = Trail::new(&TrailSettings::default(), Some(target.clone()), (800, 600)).unwrap()
            .with_attenuation(|t| 1.0 - t);
        target.write().unwrap().set_translation([1.0, 0.0, 0.0]);
        trail.update().unwrap();
        let geometry = trail.geometry();
        assert_eq!(geometry.len(), 1000);
        assert_eq!(coordinates(&geometry.positions()[899]), [0.0, 0.0, 0.0]);
        assert_eq!(coordinates(&geometry.positions()[900]), [1.0, 0.0, 0.0]);
        assert_eq!(geometry.widths()[0], 1.0);
        assert_eq!(geometry.widths()[999], 0.0);
    }
    #[test]
    fn nothing_is_built_without_target() {
        let mut trail: Trail<RwLock<Node>> = Trail::new(&TrailSettings::default(), None, (800, 600)).unwrap();
        trail.update().unwrap();
        trail.update().unwrap();
        assert!(trail.geometry().is_empty());
        let target = Arc::new(RwLock::new(Node::new("late".to_string(), [4.0, 0.0, 0.0])));
        trail.on_target_changed(Some(target)).unwrap();
        trail.update().unwrap();
        assert_eq!(trail.geometry().len(), 1000);
        trail.geometry().positions().iter().for_each(|a| assert_eq!(coordinates(a), [4.0, 0.0, 0.0]));
    }
    #[test]
    fn material_can_be_overridden() {
        let target = Arc::new(RwLock::new(Node::new("target".to_string(), [0.0, 0.0, 0.0])));
        let settings = TrailSettings {
            size_attenuation: false,
            width: 50.0,
            ..TrailSettings::default()
        };
        let mut trail = Trail::new(&settings, Some(target.clone()), (800, 600)).unwrap();
        assert!(!trail.material().size_attenuation());
        assert_float_eq!(trail.material().world_width(3.0, FRAC_PI_2), 5.0 * 2.0 * 3.0 / 600.0, abs <= 1e-6);
        trail.material_mut().set_size_attenuation(true);
        assert_float_eq!(trail.material().world_width(3.0, FRAC_PI_2), 5.0, abs <= 1e-6);
        let replacement = TrailMaterial::new(1.0, [0.0, 0.0, 1.0], 320, 240);
        let trail = Trail::new(&settings, Some(target), (800, 600)).unwrap()
            .with_material(replacement.clone());
        assert_eq!(trail.material(), &replacement);
        assert!(trail.material().size_attenuation());
    }
    #[test]
    fn hooks_update_configuration() {
        let target = Arc::new(RwLock::new(Node::new("target".to_string(), [0.0, 0.0, 0.0])));
        let mut trail = Trail::new(&TrailSettings::default(), Some(target), (800, 600)).unwrap();
        trail.on_length_changed(0.5).unwrap();
        trail.on_decay_changed(2.0).unwrap();
        trail.on_local_changed(true);
        trail.on_viewport_resized(1024, 768);
        trail.set_color([0.0, 1.0, 0.0]);
        trail.set_width(1.0).unwrap();
        assert_eq!(trail.history().capacity(), 500);
        assert_eq!(trail.history().steps(), 200);
        assert!(trail.history().local());
        assert_eq!(trail.material().resolution().x, 1024.0);
        assert_eq!(coordinates(trail.material().color()), [0.0, 1.0, 0.0]);
        assert!(trail.set_width(-1.0).is_err());
        assert!(trail.on_decay_changed(f32::NAN).is_err());
        assert!(trail.on_length_changed(0.0).is_err());
        assert_eq!(trail.history().capacity(), 500);
    }
}
