//! Corners and bounds of a depth slice of the camera frustum.

use glam::{Mat4, Vec3};
use umbra_math::BoundingBox;

use crate::CameraParams;

impl CameraParams {
    /// World-space corners of the frustum slice between view depths
    /// `near` and `far`.
    ///
    /// Indices 0..4 are the near quad, 4..8 the far quad; each quad runs
    /// (-x,-y), (-x,+y), (+x,+y), (+x,-y) in camera right/up terms.
    pub fn slice_corners(&self, near: f32, far: f32) -> [Vec3; 8] {
        let (right, up, forward) = self.basis();
        let tan_half_fov = (self.fov_y * 0.5).tan();

        let mut corners = [Vec3::ZERO; 8];
        for (quad, depth) in [near, far].into_iter().enumerate() {
            let half_height = tan_half_fov * depth;
            let half_width = half_height * self.aspect_ratio;
            let center = self.position + forward * depth;
            let x = right * half_width;
            let y = up * half_height;

            let base = quad * 4;
            corners[base] = center - x - y;
            corners[base + 1] = center - x + y;
            corners[base + 2] = center + x + y;
            corners[base + 3] = center + x - y;
        }
        corners
    }
}

/// Bounds of the slice `[near, far]` after transforming its corners by
/// `transform` (with perspective divide).
pub fn frustum_slice_bounds(
    camera: &CameraParams,
    near: f32,
    far: f32,
    transform: &Mat4,
) -> BoundingBox {
    let corners = camera.slice_corners(near, far).map(|c| transform.project_point3(c));
    let first = corners[0];
    BoundingBox::from_points(corners).unwrap_or(BoundingBox::new(first, first))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn forward_camera() -> CameraParams {
        CameraParams {
            position: Vec3::ZERO,
            target: Vec3::Z,
            up: Vec3::Y,
            fov_y: FRAC_PI_2,
            aspect_ratio: 1.0,
            near_clip: 0.1,
            far_clip: 100.0,
        }
    }

    #[test]
    fn test_slice_corners_at_90_degrees() {
        let corners = forward_camera().slice_corners(1.0, 10.0);
        for c in &corners[..4] {
            assert!((c.z - 1.0).abs() < 1e-6);
            assert!((c.x.abs() - 1.0).abs() < 1e-5);
            assert!((c.y.abs() - 1.0).abs() < 1e-5);
        }
        for c in &corners[4..] {
            assert!((c.z - 10.0).abs() < 1e-5);
            assert!((c.x.abs() - 10.0).abs() < 1e-4);
            assert!((c.y.abs() - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_corner_winding() {
        let corners = forward_camera().slice_corners(1.0, 2.0);
        assert!(corners[0].x < 0.0 && corners[0].y < 0.0);
        assert!(corners[1].x < 0.0 && corners[1].y > 0.0);
        assert!(corners[2].x > 0.0 && corners[2].y > 0.0);
        assert!(corners[3].x > 0.0 && corners[3].y < 0.0);
    }

    #[test]
    fn test_aspect_widens_horizontally() {
        let camera = CameraParams {
            aspect_ratio: 2.0,
            ..forward_camera()
        };
        let bounds = frustum_slice_bounds(&camera, 1.0, 4.0, &Mat4::IDENTITY);
        assert!((bounds.max.x - 8.0).abs() < 1e-4);
        assert!((bounds.max.y - 4.0).abs() < 1e-4);
        assert!((bounds.min.z - 1.0).abs() < 1e-6);
        assert!((bounds.max.z - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_bounds_follow_transform() {
        let camera = forward_camera();
        let shift = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0));
        let plain = frustum_slice_bounds(&camera, 1.0, 2.0, &Mat4::IDENTITY);
        let moved = frustum_slice_bounds(&camera, 1.0, 2.0, &shift);
        assert!((moved.min.x - plain.min.x - 5.0).abs() < 1e-5);
        assert!((moved.max.x - plain.max.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_camera_projection_maps_slice_into_ndc() {
        let camera = forward_camera();
        let vp = camera.projection_matrix() * camera.view_matrix();
        let bounds = frustum_slice_bounds(&camera, camera.near_clip, camera.far_clip, &vp);
        assert!((bounds.min.x + 1.0).abs() < 1e-3);
        assert!((bounds.max.x - 1.0).abs() < 1e-3);
        assert!(bounds.min.z.abs() < 1e-3);
        assert!((bounds.max.z - 1.0).abs() < 1e-3);
    }
}
