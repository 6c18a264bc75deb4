//! GPU-facing packings of a [`CascadeFrame`] for the depth-only shadow
//! passes and the forward lighting pass.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};

use crate::{CameraParams, CascadeFrame};

/// Cascade slots reserved in every uniform layout.
pub const MAX_CASCADES: usize = 4;

/// Clip space to shadow-map texture coordinates:
/// `u = x * 0.5 + 0.5`, `v = y * -0.5 + 0.5`, depth unchanged.
pub const TEXTURE_BIAS: Mat4 = Mat4::from_cols(
    Vec4::new(0.5, 0.0, 0.0, 0.0),
    Vec4::new(0.0, -0.5, 0.0, 0.0),
    Vec4::new(0.0, 0.0, 1.0, 0.0),
    Vec4::new(0.5, 0.5, 0.0, 1.0),
);

/// Shadow uniform data shared by shadow and lighting shaders.
///
/// Contains 4 light-space matrices, split depths, and cascade count.
/// Total size: 4×64 + 16 + 16 = 288 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ShadowUniform {
    /// Cropped light view-projection matrix per cascade.
    pub light_matrices: [[f32; 16]; MAX_CASCADES],
    /// Far view depth per cascade (vec4).
    pub split_depths: [f32; MAX_CASCADES],
    /// Number of active cascades (u32), plus 3 padding u32s.
    pub cascade_count_pad: [u32; 4],
}

static_assertions::assert_eq_size!(ShadowUniform, [u8; 288]);

impl ShadowUniform {
    /// Pack a computed frame. Unused slots hold identity matrices and zero
    /// depths; cascades beyond [`MAX_CASCADES`] are dropped.
    pub fn from_frame(frame: &CascadeFrame) -> Self {
        let cascades = frame.cascades();
        if cascades.len() > MAX_CASCADES {
            log::warn!(
                "{} cascades computed, only {MAX_CASCADES} fit the shadow uniform",
                cascades.len()
            );
        }

        let mut uniform = Self {
            light_matrices: [Mat4::IDENTITY.to_cols_array(); MAX_CASCADES],
            split_depths: [0.0; MAX_CASCADES],
            cascade_count_pad: [0; 4],
        };
        for (slot, cascade) in cascades.iter().take(MAX_CASCADES).enumerate() {
            uniform.light_matrices[slot] = cascade.shadow_matrix.to_cols_array();
            uniform.split_depths[slot] = cascade.split_depth;
        }
        uniform.cascade_count_pad[0] = cascades.len().min(MAX_CASCADES) as u32;
        uniform
    }
}

/// Constants for one depth-only pass: caster world matrix plus the
/// cascade's shadow matrix. 128 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ShadowPassUniform {
    pub world: [f32; 16],
    pub view_proj: [f32; 16],
}

static_assertions::assert_eq_size!(ShadowPassUniform, [u8; 128]);

impl ShadowPassUniform {
    /// One entry per computed cascade, in cascade order.
    pub fn for_cascades(frame: &CascadeFrame, world: &Mat4) -> Vec<Self> {
        frame
            .cascades()
            .iter()
            .map(|cascade| Self {
                world: world.to_cols_array(),
                view_proj: cascade.shadow_matrix.to_cols_array(),
            })
            .collect()
    }
}

/// Forward lighting pass constants. 496 bytes.
///
/// Shadow matrices are pre-multiplied by [`TEXTURE_BIAS`] so the shader can
/// sample the map with the transformed xy directly.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ForwardUniform {
    pub world: [f32; 16],
    pub view: [f32; 16],
    pub proj: [f32; 16],
    /// xyz = camera position, w = padding.
    pub camera_pos: [f32; 4],
    /// xyz = light direction, w = padding.
    pub light_dir: [f32; 4],
    /// Far view depth per cascade; the shader picks the first slot that
    /// reaches the fragment's depth.
    pub split_depths: [f32; MAX_CASCADES],
    pub shadow: [[f32; 16]; MAX_CASCADES],
}

static_assertions::assert_eq_size!(ForwardUniform, [u8; 496]);

impl ForwardUniform {
    pub fn new(camera: &CameraParams, world: &Mat4, frame: &CascadeFrame) -> Self {
        let light_dir: Vec3 = frame.light().direction;
        let mut uniform = Self {
            world: world.to_cols_array(),
            view: camera.view_matrix().to_cols_array(),
            proj: camera.projection_matrix().to_cols_array(),
            camera_pos: camera.position.extend(0.0).to_array(),
            light_dir: light_dir.extend(0.0).to_array(),
            split_depths: [0.0; MAX_CASCADES],
            shadow: [TEXTURE_BIAS.to_cols_array(); MAX_CASCADES],
        };
        for (slot, cascade) in frame.cascades().iter().take(MAX_CASCADES).enumerate() {
            uniform.shadow[slot] = (TEXTURE_BIAS * cascade.shadow_matrix).to_cols_array();
            uniform.split_depths[slot] = cascade.split_depth;
        }
        uniform
    }
}
