use itertools::Itertools;
use kiss3d::{
    nalgebra::{
        Point3,
        Vector3
    },
    window::Window
};
/// Consumer of a trail's flat `x, y, z` history, oldest sample first.
pub trait TrailGeometry {
    /// `attenuation` maps the normalized position along the trail
    /// (0 oldest, 1 newest) to a width multiplier.
    fn set_points(&mut self, points: &[f32], attenuation: Option<&dyn Fn(f32) -> f32>);
}
#[derive(Clone, Debug, Default)]
pub struct MeshLine {
    position: Vec<Point3<f32>>,
    width: Vec<f32>,
    counter: Vec<f32>
}
impl MeshLine {
    pub fn new() -> MeshLine {
        MeshLine::default()
    }
    pub fn len(&self) -> usize {
        self.position.len()
    }
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }
    pub fn positions(&self) -> &[Point3<f32>] {
        &self.position
    }
    pub fn widths(&self) -> &[f32] {
        &self.width
    }
    pub fn counters(&self) -> &[f32] {
        &self.counter
    }
    /// Left/right edge points facing `eye`; zero-length segments collapse.
    pub fn ribbon(&self, eye: &Point3<f32>, line_width: f32) -> Vec<(Point3<f32>, Point3<f32>)> {
        let last = self.position.len().saturating_sub(1);
        self.position.iter().enumerate().map(|(i, a)| {
            let previous = self.position[i.saturating_sub(1)];
            let next = self.position[(i + 1).min(last)];
            let side = side_of(next - previous, eye - a);
            let offset = side * (line_width * self.width[i] * 0.5);
            (a + offset, a - offset)
        }).collect()
    }
    pub fn draw(&self, window: &mut Window, eye: &Point3<f32>, line_width: f32, color: &Point3<f32>) {
        self.ribbon(eye, line_width).iter()
            .zip(self.counter.iter())
            .tuple_windows()
            .for_each(|((a, _), (b, t))| {
                let shade = *color * *t;
                window.draw_line(&a.0, &b.0, &shade);
                window.draw_line(&a.1, &b.1, &shade);
                window.draw_line(&b.0, &b.1, &shade);
            });
    }
}
impl TrailGeometry for MeshLine {
    fn set_points(&mut self, points: &[f32], attenuation: Option<&dyn Fn(f32) -> f32>) {
        self.position.clear();
        self.width.clear();
        self.counter.clear();
        let count = points.len() / 3;
        let span = count.saturating_sub(1).max(1) as f32;
        points.chunks_exact(3).enumerate().for_each(|(i, a)| {
            let t = i as f32 / span;
            self.position.push(Point3::new(a[0], a[1], a[2]));
            self.counter.push(t);
            self.width.push(match attenuation {
                Some(x) => x(t),
                None => 1.0
            });
        });
    }
}
fn side_of(direction: Vector3<f32>, view: Vector3<f32>) -> Vector3<f32> {
    direction.cross(&view)
        .try_normalize(f32::EPSILON)
        .unwrap_or_else(Vector3::zeros)
}
