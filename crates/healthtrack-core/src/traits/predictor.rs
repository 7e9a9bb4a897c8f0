use crate::errors::HealthTrackResult;
use crate::models::{Measurements, Prediction};

/// Nutrition status classification from a set of measurements.
pub trait IPredictor: Send + Sync {
    /// Classify the measurements. Out-of-range input is a validation error.
    fn predict(&self, measurements: &Measurements) -> HealthTrackResult<Prediction>;
}
