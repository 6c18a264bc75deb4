//! Shared light view and tightly fitted orthographic projection.
//!
//! The light frame is fit to the caster rather than the whole scene, and
//! the same view matrix is reused by every cascade so that cascades never
//! disagree about where a shadow edge is.

use glam::{Mat4, Vec3};
use umbra_math::{ConvexHull, LightBasis};

use crate::CasterParams;
use crate::crop::unit_cube_clip_matrix;

/// Distance from the light eye to the nearest caster point.
pub const LIGHT_NEAR_CLIP: f32 = 1.0;

/// Slack on the caster's depth span so its far face is not clipped.
const DEPTH_SPAN_PADDING: f32 = 1.001;

/// Smallest depth range / ortho width used for flat or point-like casters.
const MIN_FIT_EXTENT: f32 = 1e-4;

/// Result of fitting the light to the caster for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightFit {
    /// Unit light direction the fit was computed for.
    pub direction: Vec3,
    /// Frame built around `direction`.
    pub basis: LightBasis,
    /// Light view matrix shared by every cascade.
    pub view: Mat4,
    /// Orthographic projection with the unit-cube fit folded in.
    pub projection: Mat4,
}

impl LightFit {
    /// `projection * view`: world space to light-clip space.
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

/// Fit the light frame and projection around a caster.
pub fn fit_light_to_caster(caster: &CasterParams, light_direction: Vec3) -> LightFit {
    let basis = LightBasis::from_w(light_direction);
    fit_light_to_hull(&caster.world_hull(), basis)
}

/// Fit the light frame and projection around a world-space hull.
pub fn fit_light_to_hull(hull: &ConvexHull, basis: LightBasis) -> LightFit {
    // Provisional frame with the eye at the world origin.
    let origin_view = Mat4::look_to_lh(Vec3::ZERO, basis.w, basis.v);
    let bounds = hull.bounds_in(&origin_view);
    let center = bounds.center();

    let depth_span = (bounds.max.z - bounds.min.z).abs();
    let far_clip =
        (depth_span * DEPTH_SPAN_PADDING + LIGHT_NEAR_CLIP).max(LIGHT_NEAR_CLIP + MIN_FIT_EXTENT);
    let slide_back = (center.z - bounds.min.z).abs() + LIGHT_NEAR_CLIP;

    // `center` lives in the provisional light space; the eye needs world space.
    let center_world = origin_view.inverse().transform_point3(center);
    let eye = center_world - basis.w * slide_back;
    let view = Mat4::look_to_lh(eye, basis.w, basis.v);

    let bounds = hull.bounds_in(&view);
    let size = (bounds.max - bounds.min).length().max(MIN_FIT_EXTENT);
    let half = size * 0.5;
    let ortho = Mat4::orthographic_lh(-half, half, -half, half, LIGHT_NEAR_CLIP, far_clip);

    let clip_bounds = hull.bounds_in(&(ortho * view));
    let clip = unit_cube_clip_matrix(clip_bounds.min, clip_bounds.max);

    log::trace!(
        "light fit: eye={eye} ortho_size={size:.3} depth=[{LIGHT_NEAR_CLIP}, {far_clip:.3}]"
    );

    LightFit {
        direction: basis.w,
        basis,
        view,
        projection: clip * ortho,
    }
}
