pub mod settings;
use std::sync::Arc;
use kiss3d::nalgebra::Point3;
use log::{
    debug,
    trace
};
use crate::{
    error::Result,
    scene::Tracked
};
use settings::{
    capacity_for,
    steps_for,
    validate_decay,
    validate_length,
    TrailSettings
};
/// Flat `x, y, z` history of a tracked object, oldest sample first.
pub struct PositionHistory<T: Tracked + ?Sized> {
    target: Option<Arc<T>>,
    point: Option<Vec<f32>>,
    length: f32,
    decay: f32,
    local: bool,
    resolution: usize,
    steps_per_tick: usize
}
impl<T: Tracked + ?Sized> PositionHistory<T> {
    pub fn new(settings: &TrailSettings) -> Result<PositionHistory<T>> {
        settings.validate()?;
        Ok(PositionHistory {
            target: None,
            point: None,
            length: settings.length,
            decay: settings.decay,
            local: settings.local,
            resolution: settings.resolution,
            steps_per_tick: settings.steps_per_tick
        })
    }
    pub fn initialize(&mut self, target: Option<Arc<T>>, length: f32, local: bool) -> Result<()> {
        validate_length(length, self.resolution)?;
        let point = match &target {
            Some(x) => {
                let position = resolve(x.as_ref(), local)?;
                let capacity = capacity_for(length, self.resolution);
                debug!("Allocating trail history of {} samples at ({}, {}, {})", capacity, position.x, position.y, position.z);
                let coordinates = [position.x, position.y, position.z];
                Some((0..capacity * 3).map(|i| coordinates[i % 3]).collect())
            },
            None => None
        };
        self.target = target;
        self.point = point;
        self.length = length;
        self.local = local;
        Ok(())
    }
    pub fn on_target_changed(&mut self, target: Option<Arc<T>>) -> Result<()> {
        let same = match (&self.target, &target) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false
        };
        if same {
            return Ok(());
        }
        match target {
            Some(x) => {
                debug!("Trail target changed, restarting history");
                let (length, local) = (self.length, self.local);
                self.initialize(Some(x), length, local)
            },
            None => {
                debug!("Trail target cleared, history frozen");
                self.target = None;
                Ok(())
            }
        }
    }
    pub fn on_length_changed(&mut self, length: f32) -> Result<()> {
        if length == self.length {
            return Ok(());
        }
        if self.target.is_none() {
            // frozen history keeps its size until a target returns
            validate_length(length, self.resolution)?;
            self.length = length;
            return Ok(());
        }
        let (target, local) = (self.target.clone(), self.local);
        self.initialize(target, length, local)
    }
    pub fn set_decay(&mut self, decay: f32) -> Result<()> {
        validate_decay(decay)?;
        self.decay = decay;
        Ok(())
    }
    pub fn set_local(&mut self, local: bool) {
        self.local = local;
    }
    pub fn sample(&mut self) -> Result<()> {
        let steps = self.steps();
        let (target, point) = match (&self.target, &mut self.point) {
            (Some(x), Some(y)) => (x, y),
            _ => return Ok(())
        };
        let position = resolve(target.as_ref(), self.local)?;
        let capacity = point.len() / 3;
        let retired = steps.min(capacity);
        trace!("Sampled ({}, {}, {}) into {} slots", position.x, position.y, position.z, retired);
        if retired == 0 {
            return Ok(());
        }
        point.copy_within(retired * 3.., 0);
        let coordinates = [position.x, position.y, position.z];
        point[(capacity - retired) * 3..].chunks_exact_mut(3)
            .for_each(|a| a.copy_from_slice(&coordinates));
        Ok(())
    }
    pub fn is_ready(&self) -> bool {
        self.target.is_some() && self.point.is_some()
    }
    pub fn as_slice(&self) -> Option<&[f32]> {
        self.point.as_deref()
    }
    pub fn capacity(&self) -> usize {
        self.point.as_ref().map(|x| x.len() / 3).unwrap_or(0)
    }
    pub fn point(&self, index: usize) -> Option<Point3<f32>> {
        let point = self.point.as_ref()?;
        point.get(index * 3..index * 3 + 3)
            .map(|a| Point3::new(a[0], a[1], a[2]))
    }
    pub fn points(&self) -> impl Iterator<Item = Point3<f32>> + '_ {
        self.point.iter()
            .flat_map(|x| x.chunks_exact(3))
            .map(|a| Point3::new(a[0], a[1], a[2]))
    }
    pub fn last(&self) -> Option<Point3<f32>> {
        self.capacity().checked_sub(1).and_then(|x| self.point(x))
    }
    pub fn target(&self) -> Option<&Arc<T>> {
        self.target.as_ref()
    }
    pub fn length(&self) -> f32 {
        self.length
    }
    pub fn decay(&self) -> f32 {
        self.decay
    }
    pub fn local(&self) -> bool {
        self.local
    }
    pub fn steps(&self) -> usize {
        steps_for(self.decay, self.steps_per_tick)
    }
}
fn resolve<T: Tracked + ?Sized>(target: &T, local: bool) -> Result<Point3<f32>> {
    if local {
        target.local_position()
    } else {
        target.world_position()
    }
}
