//! Configuration for the cascaded shadow demo.
//!
//! Scene and shadow settings persist to disk as RON files. CLI arguments
//! override the loaded values, and a reload check reports edits made while
//! the demo is running.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CameraConfig, CasterConfig, Config, DebugConfig, LightConfig, ShadowConfig};
pub use error::ConfigError;

/// Default config directory: `<platform config dir>/umbra`, or the working
/// directory when the platform has none.
pub fn default_config_dir() -> std::path::PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("umbra"))
        .unwrap_or_else(|| std::path::PathBuf::from("."))
}
