//! Camera depth range tightened to the shadow caster.

use glam::Vec3;

/// Camera depth range used for split planning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRange {
    pub near: f32,
    pub far: f32,
}

/// Tighten the camera's `[near, far]` to the caster's extent along the view
/// axis.
///
/// Each corner's depth is its offset from `camera_pos` projected onto
/// `view_dir`. The near plane never moves closer than `near`, and the far
/// plane always ends up at least one unit beyond the new near plane.
pub fn adjust_clip_planes<I>(
    corners: I,
    camera_pos: Vec3,
    view_dir: Vec3,
    near: f32,
    far: f32,
) -> ClipRange
where
    I: IntoIterator<Item = Vec3>,
{
    let (min_z, max_z) = corners
        .into_iter()
        .map(|corner| (corner - camera_pos).dot(view_dir))
        .fold((far, near), |(min_z, max_z), z| (min_z.min(z), max_z.max(z)));

    let near = min_z.max(near);
    let far = max_z.max(near + 1.0);
    ClipRange { near, far }
}
