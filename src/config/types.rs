use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_DELAY_MS;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub counter: CounterConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Counter store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Count the store starts from.
    pub initial_count: i64,
    /// Amount each button press adds or removes.
    pub increment_amount: i64,
    /// How long a delayed increment stays pending, in milliseconds.
    pub delay_ms: u64,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Grace period before a spinner is shown. Signed so that a negative
    /// value in the file is reported instead of failing to parse.
    pub spinner_delay_ms: i64,
    /// Redraw/animation tick in milliseconds.
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set (e.g. "info", "counterflow=debug").
    pub level: String,
    /// Log file. The TUI owns stdout, so without a file logging is off.
    pub file: Option<PathBuf>,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            initial_count: 0,
            increment_amount: 1,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            spinner_delay_ms: 200,
            tick_rate_ms: 100,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
