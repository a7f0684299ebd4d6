//! Driver configuration.
//!
//! Read from `MAILBOX_CHESS_*` environment variables, for example
//! `MAILBOX_CHESS_LOG_FILTER=debug` or `MAILBOX_CHESS_SEED=42`. Anything
//! unset falls back to `DriverConfig::default()`.

use serde::Deserialize;

pub const ENV_PREFIX: &str = "MAILBOX_CHESS";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Seed for the random mover; entropy when absent.
    pub seed: Option<u64>,
    pub show_board: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_owned(),
            seed: None,
            show_board: true,
        }
    }
}

impl DriverConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    pub fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
