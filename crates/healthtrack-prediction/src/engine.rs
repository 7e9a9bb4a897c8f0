//! StatusPredictor: tier selection, entropy draws, normalization, rounding.
//!
//! Implements `IPredictor` from healthtrack-core.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;

use healthtrack_core::config::PredictionConfig;
use healthtrack_core::constants::{MAX_PROBABILITY_DECIMALS, PROBABILITY_DECIMALS};
use healthtrack_core::errors::HealthTrackResult;
use healthtrack_core::models::{Measurements, NutritionStatus, Prediction, StatusProbabilities};
use healthtrack_core::traits::IPredictor;

use crate::entropy::EntropySource;
use crate::tiers::SeverityTier;

/// Unrounded prediction with the intermediate values kept for inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPrediction {
    pub bmi: f64,
    pub tier: SeverityTier,
    /// Per-class draws before normalization.
    pub draws: StatusProbabilities,
    /// Draws divided by their sum.
    pub probabilities: StatusProbabilities,
    pub status: NutritionStatus,
}

impl RawPrediction {
    /// Status plus probabilities rounded to `decimals` places.
    pub fn to_prediction(&self, decimals: u32) -> Prediction {
        Prediction {
            status: self.status,
            probabilities: self.probabilities.rounded(decimals),
        }
    }
}

/// Heuristic malnutrition status predictor.
pub struct StatusPredictor {
    entropy: Mutex<Box<dyn EntropySource>>,
    decimals: u32,
}

impl StatusPredictor {
    pub fn new(entropy: impl EntropySource + 'static) -> Self {
        Self {
            entropy: Mutex::new(Box::new(entropy)),
            decimals: PROBABILITY_DECIMALS,
        }
    }

    /// Predictor seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic predictor: the same seed replays the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &PredictionConfig) -> Self {
        let predictor = match config.random_seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        };
        predictor.with_decimals(config.probability_decimals)
    }

    /// Decimal places for `predict`, capped at `MAX_PROBABILITY_DECIMALS`.
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        if decimals > MAX_PROBABILITY_DECIMALS {
            tracing::warn!(
                requested = decimals,
                max = MAX_PROBABILITY_DECIMALS,
                "probability decimals capped"
            );
        }
        self.decimals = decimals.min(MAX_PROBABILITY_DECIMALS);
        self
    }

    /// Validate, pick the tier, draw and normalize. No rounding.
    pub fn predict_raw(&self, measurements: &Measurements) -> HealthTrackResult<RawPrediction> {
        measurements.validate()?;

        let tier = SeverityTier::classify(measurements);
        let ranges = tier.ranges();

        let draws = {
            let mut entropy = self
                .entropy
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let sam = ranges.sam.sample(entropy.next_unit());
            let mam = ranges.mam.sample(entropy.next_unit());
            let normal = ranges.normal.sample(entropy.next_unit());
            StatusProbabilities::new(sam, mam, normal)
        };

        // Every range has a positive lower bound, so the total is never zero.
        let probabilities = draws.normalized().unwrap_or(draws);
        let status = probabilities.most_likely();

        tracing::debug!(
            bmi = measurements.bmi(),
            tier = ?tier,
            status = %status,
            "status predicted"
        );

        Ok(RawPrediction {
            bmi: measurements.bmi(),
            tier,
            draws,
            probabilities,
            status,
        })
    }
}

impl Default for StatusPredictor {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl IPredictor for StatusPredictor {
    fn predict(&self, measurements: &Measurements) -> HealthTrackResult<Prediction> {
        Ok(self.predict_raw(measurements)?.to_prediction(self.decimals))
    }
}
