//! Headless demo that drives the cascaded shadow pipeline frame by frame.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p umbra-demo` to print per-frame cascade data.
//! Run with `cargo run -p umbra-demo -- --cascades 2 --lambda 0.8` to override the split setup.

use clap::Parser;
use glam::Mat4;
use tracing::{info, warn};
use umbra_config::{CliArgs, Config};
use umbra_shadow::overlay::{Viewport, preview_quads};
use umbra_shadow::{
    CameraParams, CascadeFrame, CascadeSettings, CascadedShadows, CasterParams, ForwardUniform,
    LAMBDA_STEP, LightParams, ROTATION_STEP, ShadowInputs, ShadowPassUniform, ShadowUniform,
};

fn inputs_from_config(config: &Config) -> ShadowInputs {
    ShadowInputs::new(
        CameraParams::from(&config.camera),
        LightParams::from(&config.light),
        CasterParams::from(&config.caster),
    )
}

/// World-space width one shadow-map texel covers in each cascade.
fn texel_footprints(frame: &CascadeFrame, resolution: u32) -> Vec<f32> {
    let light_vp = frame.light().view_projection();
    let light_width = 2.0 / frame.light_projection().x_axis.x;
    frame
        .cascades()
        .iter()
        .map(|cascade| {
            let crop: Mat4 = cascade.shadow_matrix * light_vp.inverse();
            light_width / crop.x_axis.x / resolution.max(1) as f32
        })
        .collect()
}

fn log_frame(index: u32, inputs: &ShadowInputs, frame: &CascadeFrame, resolution: u32) {
    let range = frame.clip_range();
    info!(
        frame = index,
        near = range.near,
        far = range.far,
        lambda = inputs.light.lambda,
        "light dir {:?}",
        frame.light().direction
    );
    let footprints = texel_footprints(frame, resolution);
    for (i, (cascade, texel)) in frame.cascades().iter().zip(footprints).enumerate() {
        info!(
            cascade = i,
            split_depth = cascade.split_depth,
            texel_size = texel,
            "cascade ready"
        );
    }
}

/// Runs the configured number of frames, sweeping the light and split blend
/// the way the interactive controls would.
fn simulate_frames(config: &Config) -> CascadeFrame {
    let mut inputs = inputs_from_config(config);
    let mut shadows = CascadedShadows::new(CascadeSettings::from(&config.shadow));
    let frames = config.debug.frames.max(1);

    for index in 0..frames {
        let frame = shadows.update(&inputs);
        log_frame(index, &inputs, frame, config.shadow.resolution);

        inputs.light.rotate(0.0, ROTATION_STEP);
        inputs.light.adjust_lambda(LAMBDA_STEP);
    }

    inputs.light.reset();
    info!(
        rotation_x = inputs.light.rotation_x,
        rotation_y = inputs.light.rotation_y,
        lambda = inputs.light.lambda,
        "light controls reset"
    );
    shadows.update(&inputs).clone()
}

fn report_uniforms(config: &Config, frame: &CascadeFrame) {
    let inputs = inputs_from_config(config);
    let shadow = ShadowUniform::from_frame(frame);
    let passes = ShadowPassUniform::for_cascades(frame, &inputs.caster.world);
    let forward = ForwardUniform::new(&inputs.camera, &inputs.caster.world, frame);
    info!(
        cascades = shadow.cascade_count_pad[0],
        shadow_bytes = std::mem::size_of_val(&shadow),
        pass_count = passes.len(),
        forward_bytes = std::mem::size_of_val(&forward),
        "uniforms packed"
    );

    if config.debug.show_cascade_preview {
        let viewport = Viewport {
            width: config.camera.width as f32,
            height: config.camera.height as f32,
        };
        for quad in preview_quads(viewport, frame.cascades().len()) {
            info!(
                layer = quad.array_index,
                "preview quad offset ({:.3}, {:.3})", quad.matrix[12], quad.matrix[13]
            );
        }
    }
}

fn main() {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(umbra_config::default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    let on_disk = config.clone();
    config.apply_cli_overrides(&args);
    if let Err(e) = config.validate() {
        eprintln!("{e}, using defaults");
        config = Config::default();
    }

    let log_dir = config_dir.join("logs");
    umbra_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        cascades = config.shadow.cascade_count,
        resolution = config.shadow.resolution,
        frames = config.debug.frames,
        "Starting cascaded shadow demo"
    );

    let frame = simulate_frames(&config);
    report_uniforms(&config, &frame);

    match on_disk.reload(&config_dir) {
        Ok(Some(_)) => info!("config.ron changed on disk during the run"),
        Ok(None) => {}
        Err(e) => warn!("Config reload check failed: {e}"),
    }

    info!("Cascaded shadow demo completed");
}
