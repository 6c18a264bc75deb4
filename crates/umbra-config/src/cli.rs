//! Command-line argument parsing for the shadow demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Shadow demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "umbra", about = "Cascaded shadow map demo")]
pub struct CliArgs {
    /// Number of shadow cascades (1 to 4).
    #[arg(long)]
    pub cascades: Option<u32>,

    /// Split blend between uniform (0) and logarithmic (1).
    #[arg(long)]
    pub lambda: Option<f32>,

    /// Frames to simulate.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(count) = args.cascades {
            self.shadow.cascade_count = count;
        }
        if let Some(lambda) = args.lambda {
            self.light.lambda = lambda;
        }
        if let Some(frames) = args.frames {
            self.debug.frames = frames;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
