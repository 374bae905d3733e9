pub mod material;
pub mod mesh_line;
pub mod trail;
use kiss3d::{
    camera::{
        ArcBall,
        Camera
    },
    nalgebra::{
        Point3,
        Translation3
    },
    scene::SceneNode,
    window::Window
};
use crate::{
    error::Result,
    scene::Tracked
};
use trail::Trail;
pub const FIELD_OF_VIEW: f32 = std::f32::consts::PI / 4.0;
pub struct Graphics<T: Tracked + ?Sized> {
    follow: bool,
    camera: ArcBall,
    model: SceneNode,
    trail: Trail<T>
}
impl<T: Tracked + ?Sized> Graphics<T> {
    pub fn new(trail: Trail<T>, eye: Point3<f32>, at: Point3<f32>, radius: f32, anchor: &mut SceneNode) -> Graphics<T> {
        let color = *trail.material().color();
        Graphics {
            follow: false,
            camera: ArcBall::new_with_frustrum(FIELD_OF_VIEW, 0.01, 1024.0, eye, at),
            model: {
                let mut model = anchor.add_sphere(radius);
                model.set_color(color.x, color.y, color.z);
                model
            },
            trail
        }
    }
    pub fn camera(&mut self) -> &mut ArcBall {
        &mut self.camera
    }
    pub fn trail(&self) -> &Trail<T> {
        &self.trail
    }
    pub fn trail_mut(&mut self) -> &mut Trail<T> {
        &mut self.trail
    }
    pub fn toggle_follow(&mut self) {
        self.follow = !self.follow;
    }
    pub fn update(&mut self) -> Result<()> {
        self.trail.update()
    }
    pub fn draw(&mut self, window: &mut Window) -> Result<()> {
        let position = match self.trail.history().target() {
            Some(x) => x.world_position()?,
            None => match self.trail.history().last() {
                Some(x) => x,
                None => return Ok(())
            }
        };
        self.model.set_local_translation(Translation3::new(position.x, position.y, position.z));
        if self.follow {
            self.camera.set_at(position);
        }
        self.trail.draw(window, &self.camera.eye(), FIELD_OF_VIEW);
        Ok(())
    }
}
