use std::{
    fs,
    io::Write
};
use serde::{
    Deserialize,
    Serialize
};
use crate::error::{
    Result,
    TrailError
};
pub const DEFAULT_RESOLUTION: usize = 1000;
pub const DEFAULT_STEPS_PER_TICK: usize = 100;
// hot pink
pub const DEFAULT_COLOR: [f32; 3] = [1.0, 105.0 / 255.0, 180.0 / 255.0];
/// Upper bound on history slots, 48 MiB of coordinates.
pub const MAX_CAPACITY: usize = 1 << 22;
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailSettings {
    pub length: f32,
    pub decay: f32,
    pub local: bool,
    pub width: f32,
    pub color: [f32; 3],
    pub size_attenuation: bool,
    pub resolution: usize,
    pub steps_per_tick: usize
}
impl Default for TrailSettings {
    fn default() -> TrailSettings {
        TrailSettings {
            length: 1.0,
            decay: 1.0,
            local: false,
            width: 0.2,
            color: DEFAULT_COLOR,
            size_attenuation: true,
            resolution: DEFAULT_RESOLUTION,
            steps_per_tick: DEFAULT_STEPS_PER_TICK
        }
    }
}
impl TrailSettings {
    pub fn load_json(file_path: &str) -> Result<TrailSettings> {
        let buffer = fs::read_to_string(file_path).map_err(|source| TrailError::Io {
            path: file_path.to_string(),
            source
        })?;
        let settings: TrailSettings = serde_json::from_str(&buffer).map_err(|source| TrailError::Serialization {
            path: file_path.to_string(),
            source
        })?;
        settings.validate()?;
        Ok(settings)
    }
    pub fn save_json(&self, file_path: &str) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self).map_err(|source| TrailError::Serialization {
            path: file_path.to_string(),
            source
        })?;
        let mut file = fs::File::create(file_path).map_err(|source| TrailError::Io {
            path: file_path.to_string(),
            source
        })?;
        file.write_all(contents.as_bytes()).map_err(|source| TrailError::Io {
            path: file_path.to_string(),
            source
        })
    }
    pub fn validate(&self) -> Result<()> {
        validate_length(self.length, self.resolution)?;
        validate_decay(self.decay)?;
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(TrailError::invalid(format!("width must be positive, got {}", self.width)));
        }
        Ok(())
    }
    pub fn capacity(&self) -> usize {
        capacity_for(self.length, self.resolution)
    }
    pub fn steps(&self) -> usize {
        steps_for(self.decay, self.steps_per_tick)
    }
}
pub(crate) fn capacity_for(length: f32, resolution: usize) -> usize {
    (length * resolution as f32).floor() as usize
}
pub(crate) fn steps_for(decay: f32, steps_per_tick: usize) -> usize {
    (decay * steps_per_tick as f32).floor() as usize
}
pub(crate) fn validate_length(length: f32, resolution: usize) -> Result<()> {
    if resolution == 0 {
        return Err(TrailError::invalid("resolution must be at least one slot per unit length"));
    }
    if !length.is_finite() || length <= 0.0 {
        return Err(TrailError::invalid(format!("length must be positive, got {}", length)));
    }
    match capacity_for(length, resolution) {
        0 => Err(TrailError::invalid(format!(
            "length {} holds no samples at resolution {}", length, resolution
        ))),
        x if x > MAX_CAPACITY => Err(TrailError::invalid(format!(
            "length {} needs {} samples at resolution {}, limit is {}", length, x, resolution, MAX_CAPACITY
        ))),
        _ => Ok(())
    }
}
pub(crate) fn validate_decay(decay: f32) -> Result<()> {
    if !decay.is_finite() || decay < 0.0 {
        return Err(TrailError::invalid(format!("decay must be non-negative, got {}", decay)));
    }
    Ok(())
}
