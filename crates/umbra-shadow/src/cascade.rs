//! Per-frame cascade driver.
//!
//! Fits the light to the caster, tightens the camera depth range, plans the
//! split depths and crops one shadow matrix per frustum slice. All inputs
//! are snapshotted in [`ShadowInputs`] before the pipeline runs and every
//! output slot of [`CascadeFrame`] is rewritten on each update.

use glam::Mat4;
use umbra_config::ShadowConfig;
use umbra_math::LightBasis;

use crate::clip_planes::{ClipRange, adjust_clip_planes};
use crate::crop::crop_matrix;
use crate::frustum::frustum_slice_bounds;
use crate::light::BASE_LIGHT_DIRECTION;
use crate::light_fit::{LightFit, fit_light_to_hull};
use crate::split::write_split_positions;
use crate::{CameraParams, CasterParams, LightParams};

/// Frame-start snapshot of everything the pipeline reads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShadowInputs {
    pub camera: CameraParams,
    pub light: LightParams,
    pub caster: CasterParams,
}

impl ShadowInputs {
    pub fn new(camera: CameraParams, light: LightParams, caster: CasterParams) -> Self {
        Self {
            camera,
            light,
            caster,
        }
    }
}

/// One cascade's output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CascadeState {
    /// World space to cropped light-clip space (`crop * proj * view`).
    pub shadow_matrix: Mat4,
    /// Far view-space depth covered by this cascade.
    pub split_depth: f32,
}

/// Cascade count and other settings that persist across frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeSettings {
    /// Number of cascades (at least 1). Default: 4.
    pub cascade_count: usize,
}

impl Default for CascadeSettings {
    fn default() -> Self {
        Self { cascade_count: 4 }
    }
}

impl From<&ShadowConfig> for CascadeSettings {
    fn from(config: &ShadowConfig) -> Self {
        Self {
            cascade_count: config.cascade_count as usize,
        }
    }
}

/// Everything produced for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CascadeFrame {
    light: LightFit,
    clip_range: ClipRange,
    splits: Vec<f32>,
    cascades: Vec<CascadeState>,
}

impl Default for CascadeFrame {
    fn default() -> Self {
        Self {
            light: LightFit {
                direction: BASE_LIGHT_DIRECTION,
                basis: LightBasis::from_w(BASE_LIGHT_DIRECTION),
                view: Mat4::IDENTITY,
                projection: Mat4::IDENTITY,
            },
            clip_range: ClipRange { near: 0.0, far: 0.0 },
            splits: Vec::new(),
            cascades: Vec::new(),
        }
    }
}

impl CascadeFrame {
    pub fn cascades(&self) -> &[CascadeState] {
        &self.cascades
    }

    /// The `N + 1` boundaries the cascades were cut from.
    pub fn splits(&self) -> &[f32] {
        &self.splits
    }

    pub fn light(&self) -> &LightFit {
        &self.light
    }

    /// Light view matrix shared by all cascades.
    pub fn light_view(&self) -> Mat4 {
        self.light.view
    }

    /// Fitted light projection, before any per-cascade crop.
    pub fn light_projection(&self) -> Mat4 {
        self.light.projection
    }

    /// Camera depth range after tightening against the caster.
    pub fn clip_range(&self) -> ClipRange {
        self.clip_range
    }

    /// Index of the cascade the lighting pass samples at `view_depth`: the
    /// first one whose split depth reaches it, or the last cascade beyond
    /// every split.
    pub fn cascade_for_depth(&self, view_depth: f32) -> usize {
        self.cascades
            .iter()
            .position(|c| view_depth <= c.split_depth)
            .unwrap_or(self.cascades.len().saturating_sub(1))
    }
}

/// Owns the cascade settings and the frame buffer that is overwritten on
/// every [`CascadedShadows::update`].
#[derive(Clone, Debug, Default)]
pub struct CascadedShadows {
    settings: CascadeSettings,
    frame: CascadeFrame,
}

impl CascadedShadows {
    /// # Panics
    ///
    /// Panics if `settings.cascade_count` is zero.
    pub fn new(settings: CascadeSettings) -> Self {
        assert!(settings.cascade_count >= 1, "cascade count must be at least 1");
        Self {
            settings,
            frame: CascadeFrame::default(),
        }
    }

    pub fn settings(&self) -> &CascadeSettings {
        &self.settings
    }

    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn set_cascade_count(&mut self, count: usize) {
        assert!(count >= 1, "cascade count must be at least 1");
        self.settings.cascade_count = count;
    }

    /// Last computed frame.
    pub fn frame(&self) -> &CascadeFrame {
        &self.frame
    }

    /// Run the whole pipeline for this frame's inputs.
    pub fn update(&mut self, inputs: &ShadowInputs) -> &CascadeFrame {
        compute_cascades_into(inputs, self.settings.cascade_count, &mut self.frame);
        &self.frame
    }
}

/// Pure form of [`CascadedShadows::update`].
pub fn compute_cascades(inputs: &ShadowInputs, cascade_count: usize) -> CascadeFrame {
    let mut frame = CascadeFrame::default();
    compute_cascades_into(inputs, cascade_count, &mut frame);
    frame
}

fn compute_cascades_into(inputs: &ShadowInputs, cascade_count: usize, frame: &mut CascadeFrame) {
    let camera = &inputs.camera;

    let basis = LightBasis::from_w(inputs.light.direction());
    let hull = inputs.caster.world_hull();
    let light = fit_light_to_hull(&hull, basis);

    let clip_range = adjust_clip_planes(
        hull.iter(),
        camera.position,
        camera.forward(),
        camera.near_clip,
        camera.far_clip,
    );

    frame.splits.resize(cascade_count + 1, 0.0);
    write_split_positions(
        cascade_count,
        inputs.light.lambda,
        clip_range.near,
        clip_range.far,
        &mut frame.splits,
    );

    let light_view_proj = light.view_projection();
    frame.cascades.clear();
    for i in 0..cascade_count {
        let (near, far) = (frame.splits[i], frame.splits[i + 1]);
        frame
            .cascades
            .push(crop_cascade(camera, near, far, &light_view_proj));
    }

    frame.light = light;
    frame.clip_range = clip_range;

    log::debug!(
        "cascades: count={cascade_count} lambda={:.2} range=[{:.3}, {:.3}] splits={:?}",
        inputs.light.lambda,
        clip_range.near,
        clip_range.far,
        frame.splits
    );
}

fn crop_cascade(camera: &CameraParams, near: f32, far: f32, light_view_proj: &Mat4) -> CascadeState {
    let slice = frustum_slice_bounds(camera, near, far, light_view_proj);
    let crop = crop_matrix(&slice);
    log::trace!("slice [{near:.3}, {far:.3}] light-clip bounds {slice:?}");
    CascadeState {
        shadow_matrix: crop * *light_view_proj,
        split_depth: far,
    }
}

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod tests;
