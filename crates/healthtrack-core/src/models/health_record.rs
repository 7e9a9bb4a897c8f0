use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::measurements::Measurements;
use super::status::{NutritionStatus, Prediction, StatusProbabilities};

/// Immutable measurement snapshot plus the prediction made from it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthRecord {
    pub id: String,
    pub child_id: String,
    /// Centimetres.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    pub edema: bool,
    pub poverty_index: u8,
    pub sanitation_index: u8,
    pub meals_per_day: u32,
    pub predicted_status: NutritionStatus,
    pub sam_probability: f64,
    pub mam_probability: f64,
    pub normal_probability: f64,
    pub recorded_at: DateTime<Utc>,
    /// Health worker who took the measurements.
    pub recorded_by: Option<String>,
}

impl HealthRecord {
    pub fn measurements(&self) -> Measurements {
        Measurements {
            height_cm: self.height,
            weight_kg: self.weight,
            edema: self.edema,
            poverty_index: self.poverty_index,
            sanitation_index: self.sanitation_index,
            meals_per_day: self.meals_per_day,
        }
    }

    pub fn probabilities(&self) -> StatusProbabilities {
        StatusProbabilities::new(
            self.sam_probability,
            self.mam_probability,
            self.normal_probability,
        )
    }
}

/// A record ready to be persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHealthRecord {
    pub child_id: String,
    pub measurements: Measurements,
    pub prediction: Prediction,
    pub recorded_by: Option<String>,
}
