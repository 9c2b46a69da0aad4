use std::f32::consts::TAU;

use kiss3d::camera::Camera;
use kiss3d::renderer::{LineRenderer, Renderer};
use nalgebra::Point3;

const RING_SEGMENTS: usize = 100;

/// Draws the thin orbit ring markers as line loops in the x-z plane.
/// Rings are buffered during the prerender pass and flushed by the engine's
/// render pass each frame.
pub struct RingRenderer {
    line_renderer: LineRenderer,
}

impl RingRenderer {
    pub fn new() -> Self {
        RingRenderer {
            line_renderer: LineRenderer::new(),
        }
    }

    pub fn draw_ring(&mut self, radius: f32, color: Point3<f32>) {
        let mut prev = ring_point(radius, 0);
        for i in 1..=RING_SEGMENTS {
            let pt = ring_point(radius, i);
            self.line_renderer.draw_line(prev, pt, color);
            prev = pt;
        }
    }
}

fn ring_point(radius: f32, segment: usize) -> Point3<f32> {
    let theta = TAU * (segment as f32) / (RING_SEGMENTS as f32);
    Point3::new(radius * theta.cos(), 0.0, radius * theta.sin())
}

impl Renderer for RingRenderer {
    fn render(&mut self, pass: usize, camera: &mut dyn Camera) {
        self.line_renderer.render(pass, camera);
    }
}
