//! Structured logging for the shadow demo.
//!
//! Console output with uptime timestamps and targets, plus a JSON log file in
//! debug builds. The library crates log through the `log` facade; the
//! subscriber installed here picks those records up alongside `tracing`
//! events.

use std::fs::File;
use std::path::Path;

use tracing_subscriber::fmt::format::{Format, Json, JsonFields};
use tracing_subscriber::fmt::time::Uptime;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use umbra_config::Config;

/// File name of the JSON log written in debug builds.
pub const LOG_FILE_NAME: &str = "umbra.log";

const DEFAULT_FILTER: &str = "info";

/// JSON file layer type produced by [`json_file_layer`].
pub type JsonFileLayer<S> = fmt::Layer<S, JsonFields, Format<Json, Uptime>, File>;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the config's `debug.log_level`, which wins over the
/// built-in default. When `debug_build` is set and `log_dir` is writable, a
/// JSON copy of every event goes to [`LOG_FILE_NAME`] inside it.
///
/// # Examples
///
/// ```no_run
/// use umbra_config::Config;
/// use umbra_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directive(config);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && let Some(file_layer) = json_file_layer(log_dir)
    {
        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Filter directive from the config, falling back to the default when the
/// config is absent or its level is blank.
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.trim().is_empty() => {
            config.debug.log_level.trim().to_string()
        }
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// JSON layer writing to `log_dir/umbra.log`, or `None` when the directory
/// or file cannot be created.
pub fn json_file_layer<S>(log_dir: &Path) -> Option<JsonFileLayer<S>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    std::fs::create_dir_all(log_dir).ok()?;
    let log_file = File::create(log_dir.join(LOG_FILE_NAME)).ok()?;
    Some(
        fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json(),
    )
}

/// `EnvFilter` built from the default directive.
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
