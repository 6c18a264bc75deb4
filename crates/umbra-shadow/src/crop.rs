//! Post-projection fitting matrices.
//!
//! [`unit_cube_clip_matrix`] remaps the whole caster into the canonical clip
//! volume once per frame. [`crop_matrix`] then zooms each cascade onto its
//! frustum slice without ever shrinking below native resolution.

use glam::{Mat4, Vec3};
use umbra_math::BoundingBox;

/// Lower bound on a fitted extent, keeping the scale finite for flat boxes.
const MIN_EXTENT: f32 = f32::EPSILON;

/// Matrix mapping `min..max` onto x,y ∈ [-1, 1] and z ∈ [0, 1].
///
/// No scale floor is applied: the box fills the clip volume exactly.
pub fn unit_cube_clip_matrix(min: Vec3, max: Vec3) -> Mat4 {
    let size = (max - min).max(Vec3::splat(MIN_EXTENT));
    let scale = Vec3::new(2.0 / size.x, 2.0 / size.y, 1.0 / size.z);
    let offset = Vec3::new(
        -(max.x + min.x) / size.x,
        -(max.y + min.y) / size.y,
        -min.z / size.z,
    );
    Mat4::from_translation(offset) * Mat4::from_scale(scale)
}

/// Crop matrix that zooms a cascade onto its light-clip-space slice bounds.
///
/// X and Y are scaled by `2 / extent` and shifted so the box centre lands on
/// the origin; the shift uses the unclamped scale, then the scale is floored
/// at 1.0 so a slice wider than the caster fit never under-samples the map.
///
/// Z passes through untouched. Remapping it to `[0, 1]` made the map go
/// black whenever the slice's near z approached zero, so that step is
/// disabled outright.
pub fn crop_matrix(bounds: &BoundingBox) -> Mat4 {
    let size = (bounds.max - bounds.min).max(Vec3::splat(MIN_EXTENT));

    let scale_x = 2.0 / size.x;
    let scale_y = 2.0 / size.y;
    let offset_x = -0.5 * (bounds.max.x + bounds.min.x) * scale_x;
    let offset_y = -0.5 * (bounds.max.y + bounds.min.y) * scale_y;

    let scale = Vec3::new(scale_x.max(1.0), scale_y.max(1.0), 1.0);
    let offset = Vec3::new(offset_x, offset_y, 0.0);
    Mat4::from_translation(offset) * Mat4::from_scale(scale)
}
