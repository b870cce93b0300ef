// Standard library
use std::path::PathBuf;
use std::sync::Arc;

// 3rd party crates
use serde::Deserialize;
use tokio::sync::RwLock;

// Project imports
use crate::providers::crpt::types::CrptConfig;
use crate::utility::rate_limiter::RateLimitConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Log {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub log: Log,
    pub api: CrptConfig,
    pub rate_limit: RateLimitConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings that passed validation.
#[derive(Debug)]
pub struct ValidatedSettings(pub(crate) Settings);

/// Manages the application settings.
pub struct ConfigManager {
    pub settings: Arc<RwLock<Settings>>,
    pub config_path: PathBuf,
}
