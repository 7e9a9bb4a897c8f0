use serde::{Deserialize, Serialize};

use super::defaults;

/// Status predictor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Fixed seed for the entropy source. `None` seeds from the OS.
    pub random_seed: Option<u64>,
    /// Decimal places kept on stored probabilities.
    pub probability_decimals: u32,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            probability_decimals: defaults::DEFAULT_PROBABILITY_DECIMALS,
        }
    }
}
