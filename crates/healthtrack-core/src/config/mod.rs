pub mod auth_config;
pub mod defaults;
pub mod observability_config;
pub mod prediction_config;
pub mod storage_config;

pub use auth_config::AuthConfig;
pub use observability_config::ObservabilityConfig;
pub use prediction_config::PredictionConfig;
pub use storage_config::StorageConfig;

use serde::{Deserialize, Serialize};

use crate::errors::HealthTrackResult;

/// Top-level configuration. Every section falls back to its defaults when
/// omitted from the TOML source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthTrackConfig {
    pub storage: StorageConfig,
    pub prediction: PredictionConfig,
    pub auth: AuthConfig,
    pub observability: ObservabilityConfig,
}

impl HealthTrackConfig {
    /// Parse a configuration from a TOML string.
    pub fn from_toml(source: &str) -> HealthTrackResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &std::path::Path) -> HealthTrackResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            crate::errors::HealthTrackError::ConfigError(format!("{}: {e}", path.display()))
        })?;
        Self::from_toml(&source)
    }
}
