//! Tracing setup.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber.
///
/// The terminal UI owns stdout, so events are only recorded when a log
/// file is configured. `RUST_LOG` takes precedence over the configured
/// level. Returns `Ok(false)` when logging stays disabled.
pub fn init_tracing(config: &LoggingConfig) -> std::io::Result<bool> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();

    Ok(installed)
}
