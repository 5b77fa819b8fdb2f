//! Command-line arguments. Values given here override the config file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "counterflow",
    version,
    about = "Terminal counter with delayed increments"
)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Starting count
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub initial: Option<i64>,

    /// Amount added or removed per button press
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub amount: Option<i64>,

    /// How long a delayed increment stays pending, in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Grace period before spinners appear, in milliseconds
    #[arg(long, value_name = "MS", allow_negative_numbers = true)]
    pub spinner_delay_ms: Option<i64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file named by `--config` (or the default one) and
    /// apply command-line overrides. The result is validated.
    pub fn resolve_config(&self) -> Result<Config, crate::config::ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(initial) = self.initial {
            config.counter.initial_count = initial;
        }
        if let Some(amount) = self.amount {
            config.counter.increment_amount = amount;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.counter.delay_ms = delay_ms;
        }
        if let Some(spinner_delay_ms) = self.spinner_delay_ms {
            config.ui.spinner_delay_ms = spinner_delay_ms;
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}
