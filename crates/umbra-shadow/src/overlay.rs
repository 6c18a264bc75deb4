//! Screen-space placement of the shadow-map preview quads.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Pixel spacing between neighbouring preview quads.
const PREVIEW_STRIDE: f32 = 100.0;
/// Half-size of each preview quad in pixels.
const PREVIEW_HALF_SIZE: f32 = 50.0;

/// Render target size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Matrix placing a `[-1, 1]²` quad at pixel offset `(x, y)` with
/// half-size `(sx, sy)`, measured from the bottom-left corner of the viewport.
pub fn screen_quad_matrix(viewport: Viewport, x: f32, y: f32, sx: f32, sy: f32) -> Mat4 {
    let dx = 2.0 / viewport.width;
    let dy = 2.0 / viewport.height;
    let tx = -1.0 + dx * (x + sx);
    let ty = -1.0 + dy * (y + sy);
    Mat4::from_translation(Vec3::new(tx, ty, 0.0)) * Mat4::from_scale(Vec3::new(dx * sx, dy * sy, 1.0))
}

/// Preview quad constants: placement matrix plus the cascade layer to show.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct QuadUniform {
    pub matrix: [f32; 16],
    pub array_index: f32,
    pub _padding: [f32; 3],
}

/// One preview quad per cascade, laid out left to right along the bottom
/// edge.
pub fn preview_quads(viewport: Viewport, count: usize) -> Vec<QuadUniform> {
    (0..count)
        .map(|i| QuadUniform {
            matrix: screen_quad_matrix(
                viewport,
                PREVIEW_STRIDE * i as f32,
                0.0,
                PREVIEW_HALF_SIZE,
                PREVIEW_HALF_SIZE,
            )
            .to_cols_array(),
            array_index: i as f32,
            _padding: [0.0; 3],
        })
        .collect()
}
