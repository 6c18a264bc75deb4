//! Camera snapshot consumed by the cascade pipeline.

use glam::{Mat4, Vec3};
use umbra_config::CameraConfig;

/// Look-at camera parameters captured at frame start.
///
/// View space is left-handed: +Z runs from `position` toward `target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Approximate up vector; re-orthogonalized in [`CameraParams::basis`].
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height.
    pub aspect_ratio: f32,
    /// Near clip plane distance (always positive).
    pub near_clip: f32,
    /// Far clip plane distance (always positive, > near).
    pub far_clip: f32,
}

impl CameraParams {
    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Returns `(right, up, forward)`, mutually orthogonal unit vectors.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = self.forward();
        let right = self.up.cross(forward).normalize();
        let up = forward.cross(right).normalize();
        (right, up, forward)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_lh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, self.aspect_ratio, self.near_clip, self.far_clip)
    }
}

impl Default for CameraParams {
    fn default() -> Self {
        Self::from(&CameraConfig::default())
    }
}

impl From<&CameraConfig> for CameraParams {
    fn from(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::from_array(config.position),
            target: Vec3::from_array(config.target),
            up: Vec3::from_array(config.up),
            fov_y: config.fov_y,
            aspect_ratio: config.width as f32 / config.height.max(1) as f32,
            near_clip: config.near_clip,
            far_clip: config.far_clip,
        }
    }
}
