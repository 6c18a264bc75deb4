//! Directional light orientation and the split-blend factor the user tunes
//! alongside it.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use glam::{Mat3, Vec3};
use umbra_config::LightConfig;

/// Direction the light points along before any rotation is applied.
pub const BASE_LIGHT_DIRECTION: Vec3 = Vec3::NEG_Y;

/// Rotation increment (radians) applied per light-control step.
pub const ROTATION_STEP: f32 = 0.05;

/// Lambda increment applied per blend-control step.
pub const LAMBDA_STEP: f32 = 0.01;

const DEFAULT_ROTATION_X: f32 = FRAC_PI_4;
const DEFAULT_ROTATION_Y: f32 = FRAC_PI_2;
const DEFAULT_LAMBDA: f32 = 0.5;

/// Light orientation as two rotation angles plus the split blend factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightParams {
    /// Rotation about the X axis, applied first.
    pub rotation_x: f32,
    /// Rotation about the Y axis, applied second.
    pub rotation_y: f32,
    /// Log/uniform split blend. `1.0` is fully logarithmic.
    pub lambda: f32,
}

impl Default for LightParams {
    fn default() -> Self {
        Self {
            rotation_x: DEFAULT_ROTATION_X,
            rotation_y: DEFAULT_ROTATION_Y,
            lambda: DEFAULT_LAMBDA,
        }
    }
}

impl From<&LightConfig> for LightParams {
    fn from(config: &LightConfig) -> Self {
        Self {
            rotation_x: config.rotation_x,
            rotation_y: config.rotation_y,
            lambda: config.lambda,
        }
    }
}

impl LightParams {
    /// Normalized direction vector pointing FROM the light.
    pub fn direction(&self) -> Vec3 {
        let rotation = Mat3::from_rotation_y(self.rotation_y) * Mat3::from_rotation_x(self.rotation_x);
        (rotation * BASE_LIGHT_DIRECTION).normalize()
    }

    /// Add `dx`/`dy` radians to the two rotation angles.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.rotation_x += dx;
        self.rotation_y += dy;
    }

    /// Shift lambda by `delta`, clamped to `[0, 1]`.
    pub fn adjust_lambda(&mut self, delta: f32) {
        self.lambda = (self.lambda + delta).clamp(0.0, 1.0);
    }

    /// Restore the default orientation and blend.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
