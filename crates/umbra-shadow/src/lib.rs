//! Parallel-split cascaded shadow matrices for a single directional light.
//!
//! Once per frame the light is fit around the shadow caster, the camera's
//! depth range is cut into cascades with a blend of logarithmic and uniform
//! splits, and each cascade gets a crop matrix that spends the shadow map's
//! resolution on its own frustum slice. Rendering collaborators consume the
//! resulting matrices and split depths through [`CascadeFrame`] or the
//! packed uniforms in [`uniform`].

mod camera;
mod cascade;
mod caster;
mod clip_planes;
pub mod crop;
mod frustum;
mod light;
mod light_fit;
pub mod overlay;
mod split;
pub mod uniform;

pub use camera::CameraParams;
pub use cascade::{
    CascadeFrame, CascadeSettings, CascadeState, CascadedShadows, ShadowInputs, compute_cascades,
};
pub use caster::CasterParams;
pub use clip_planes::{ClipRange, adjust_clip_planes};
pub use crop::{crop_matrix, unit_cube_clip_matrix};
pub use frustum::frustum_slice_bounds;
pub use light::{BASE_LIGHT_DIRECTION, LAMBDA_STEP, LightParams, ROTATION_STEP};
pub use light_fit::{LIGHT_NEAR_CLIP, LightFit, fit_light_to_caster, fit_light_to_hull};
pub use split::{compute_split_positions, write_split_positions};
pub use uniform::{
    ForwardUniform, MAX_CASCADES, ShadowPassUniform, ShadowUniform, TEXTURE_BIAS,
};
