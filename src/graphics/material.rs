use kiss3d::nalgebra::{
    Point3,
    Vector2
};
pub const WIDTH_SCALE: f32 = 0.1;
#[derive(Clone, Debug, PartialEq)]
pub struct TrailMaterial {
    color: Point3<f32>,
    line_width: f32,
    size_attenuation: bool,
    resolution: Vector2<f32>
}
impl TrailMaterial {
    pub fn new(width: f32, color: [f32; 3], width_px: u32, height_px: u32) -> TrailMaterial {
        TrailMaterial {
            color: Point3::new(color[0], color[1], color[2]),
            line_width: WIDTH_SCALE * width,
            size_attenuation: true,
            resolution: Vector2::new(width_px as f32, height_px as f32)
        }
    }
    pub fn color(&self) -> &Point3<f32> {
        &self.color
    }
    pub fn set_color(&mut self, color: [f32; 3]) {
        self.color = Point3::new(color[0], color[1], color[2]);
    }
    pub fn line_width(&self) -> f32 {
        self.line_width
    }
    pub fn set_width(&mut self, width: f32) {
        self.line_width = WIDTH_SCALE * width;
    }
    pub fn size_attenuation(&self) -> bool {
        self.size_attenuation
    }
    // off: line_width is in pixels
    pub fn set_size_attenuation(&mut self, size_attenuation: bool) {
        self.size_attenuation = size_attenuation;
    }
    pub fn resolution(&self) -> &Vector2<f32> {
        &self.resolution
    }
    pub fn set_resolution(&mut self, width_px: u32, height_px: u32) {
        self.resolution = Vector2::new(width_px as f32, height_px as f32);
    }
    pub fn world_width(&self, distance: f32, fov: f32) -> f32 {
        if self.size_attenuation || self.resolution.y <= 0.0 {
            self.line_width
        } else {
            self.line_width * 2.0 * distance * (fov / 2.0).tan() / self.resolution.y
        }
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use std::f32::consts::FRAC_PI_2;
    use float_eq::assert_float_eq;
    #[test]
    fn width_is_scaled() {
        let mut material = TrailMaterial::new(0.2, [1.0, 0.0, 0.0], 800, 600);
        assert_float_eq!(material.line_width(), 0.02, abs <= 1e-7);
        material.set_width(3.0);
        assert_float_eq!(material.world_width(50.0, 1.0), 0.3, abs <= 1e-6);
    }
    #[test]
    fn screen_space_width_tracks_viewport() {
        let mut material = TrailMaterial::new(100.0, [1.0, 1.0, 1.0], 800, 600);
        material.set_size_attenuation(false);
        material.set_resolution(400, 200);
        assert_eq!(material.resolution(), &Vector2::new(400.0, 200.0));
        assert_float_eq!(material.world_width(1.0, FRAC_PI_2), 0.1, abs <= 1e-6);
        assert_float_eq!(material.world_width(2.0, FRAC_PI_2), 0.2, abs <= 1e-6);
    }
}
