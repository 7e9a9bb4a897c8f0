use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_SOCIAL_INDEX, MIN_MEALS_PER_DAY, MIN_SOCIAL_INDEX};
use crate::errors::ValidationError;

/// Anthropometric and household measurements taken at a visit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Measurements {
    /// Height in centimetres.
    pub height_cm: f64,
    /// Weight in kilograms.
    pub weight_kg: f64,
    pub edema: bool,
    /// 0 (none) to 10 (extreme).
    pub poverty_index: u8,
    /// 0 (good) to 10 (poor).
    pub sanitation_index: u8,
    pub meals_per_day: u32,
}

impl Measurements {
    /// Body-mass index: weight / (height in metres)^2.
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }

    /// Reject out-of-range input instead of clamping it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(ValidationError::out_of_range(
                "height",
                self.height_cm,
                "a positive number of centimetres",
            ));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(ValidationError::out_of_range(
                "weight",
                self.weight_kg,
                "a positive number of kilograms",
            ));
        }
        let index_range = format!("between {MIN_SOCIAL_INDEX} and {MAX_SOCIAL_INDEX}");
        if self.poverty_index > MAX_SOCIAL_INDEX {
            return Err(ValidationError::out_of_range(
                "poverty_index",
                self.poverty_index,
                &index_range,
            ));
        }
        if self.sanitation_index > MAX_SOCIAL_INDEX {
            return Err(ValidationError::out_of_range(
                "sanitation_index",
                self.sanitation_index,
                &index_range,
            ));
        }
        if self.meals_per_day < MIN_MEALS_PER_DAY {
            return Err(ValidationError::out_of_range(
                "meals_per_day",
                self.meals_per_day,
                "at least 1",
            ));
        }
        Ok(())
    }
}
