//! Configuration structs with sensible defaults and RON persistence.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Most cascades the demo's uniform layouts have room for.
const MAX_CONFIGURED_CASCADES: u32 = 4;

/// Top-level demo configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Viewing camera.
    pub camera: CameraConfig,
    /// Directional light orientation and split blend.
    pub light: LightConfig,
    /// Shadow-casting geometry.
    pub caster: CasterConfig,
    /// Shadow map settings.
    pub shadow: ShadowConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Camera configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye position in world space.
    pub position: [f32; 3],
    /// Point the camera looks at.
    pub target: [f32; 3],
    /// Up hint.
    pub up: [f32; 3],
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Render target width in pixels.
    pub width: u32,
    /// Render target height in pixels.
    pub height: u32,
    /// Near clip distance.
    pub near_clip: f32,
    /// Far clip distance.
    pub far_clip: f32,
}

/// Light configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightConfig {
    /// Rotation about X applied to the straight-down base direction.
    pub rotation_x: f32,
    /// Rotation about Y applied after `rotation_x`.
    pub rotation_y: f32,
    /// Split blend: 0 = uniform, 1 = logarithmic.
    pub lambda: f32,
}

/// Shadow caster configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CasterConfig {
    /// Centre of the caster's local bounding box.
    pub center: [f32; 3],
    /// Half extents of the caster's local bounding box.
    pub half_extents: [f32; 3],
    /// Uniform scale of the caster's world transform.
    pub scale: f32,
}

/// Shadow map configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShadowConfig {
    /// Number of cascades (1 to 4).
    pub cascade_count: u32,
    /// Shadow map edge length in texels.
    pub resolution: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Report the shadow-map preview quad layout.
    pub show_cascade_preview: bool,
    /// Frames the headless demo simulates.
    pub frames: u32,
}

// --- Default implementations ---

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [100.0, 0.0, 0.0],
            target: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            fov_y: FRAC_PI_4,
            width: 960,
            height: 540,
            near_clip: 0.1,
            far_clip: 1000.0,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            rotation_x: FRAC_PI_4,
            rotation_y: FRAC_PI_2,
            lambda: 0.5,
        }
    }
}

impl Default for CasterConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0, 0.0],
            half_extents: [40.0, 12.0, 40.0],
            scale: 0.25,
        }
    }
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            cascade_count: 4,
            resolution: 1024,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_cascade_preview: true,
            frames: 8,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Reject values that would break split planning or the light fit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let camera = &self.camera;
        if !(camera.near_clip > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera.near_clip must be positive, got {}",
                camera.near_clip
            )));
        }
        if !(camera.far_clip > camera.near_clip) {
            return Err(ConfigError::Invalid(format!(
                "camera.far_clip ({}) must exceed camera.near_clip ({})",
                camera.far_clip, camera.near_clip
            )));
        }
        if camera.width == 0 || camera.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "camera size must be non-zero, got {}x{}",
                camera.width, camera.height
            )));
        }
        if camera.position == camera.target {
            return Err(ConfigError::Invalid(
                "camera.position and camera.target coincide".to_string(),
            ));
        }

        let light = &self.light;
        if !(light.rotation_x.is_finite() && light.rotation_y.is_finite()) {
            return Err(ConfigError::Invalid("light rotation must be finite".to_string()));
        }
        if !light.lambda.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "light.lambda must be finite, got {}",
                light.lambda
            )));
        }

        if !(self.caster.scale > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "caster.scale must be positive, got {}",
                self.caster.scale
            )));
        }

        let count = self.shadow.cascade_count;
        if !(1..=MAX_CONFIGURED_CASCADES).contains(&count) {
            return Err(ConfigError::Invalid(format!(
                "shadow.cascade_count must be in 1..={MAX_CONFIGURED_CASCADES}, got {count}"
            )));
        }
        if self.shadow.resolution == 0 {
            return Err(ConfigError::Invalid("shadow.resolution must be non-zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("cascade_count: 4"));
        assert!(ron_str.contains("resolution: 1024"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `caster` section entirely
        let ron_str = "(camera: (), light: (), shadow: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.caster, CasterConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let ron_str = "(light: (lambda: 0.9))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.light.lambda, 0.9);
        assert_eq!(config.light.rotation_x, LightConfig::default().rotation_x);
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.shadow.cascade_count = 2;
        config.light.lambda = 0.75;
        config.camera.position = [0.0, 20.0, -50.0];

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.shadow.cascade_count = 3;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().shadow.cascade_count, 3);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_ron_comments_preserved() {
        let ron_str = "// This is a comment\n(\n  // Another comment\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_bad_cascade_count() {
        let mut config = Config::default();
        config.shadow.cascade_count = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        config.shadow.cascade_count = 5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_clip_range() {
        let mut config = Config::default();
        config.camera.near_clip = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.camera.far_clip = config.camera.near_clip;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.camera.near_clip = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_lambda() {
        let mut config = Config::default();
        config.light.lambda = f32::INFINITY;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("lambda"));
    }
}
