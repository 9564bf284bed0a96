//! Tracing initialization and subscriber setup.
//!
//! Events are formatted as plain-text lines by `tracing_subscriber` and
//! written to a rotating file in the plugin data directory.

use super::file_writer::{FileWriter, SharedWriter};
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Initializes the tracing subscriber with file-based output.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # File Location
///
/// `~/.local/share/zellij/hirepoint/hirepoint.log`, seen through the
/// Zellij sandbox as `/host/.local/share/zellij/hirepoint`.
///
/// # Initialization Behavior
///
/// - Creates data directory if it doesn't exist
/// - Silently returns if directory creation fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));
    let writer = SharedWriter::new(FileWriter::new(crate::infrastructure::paths::log_file()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(move || writer.clone());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
