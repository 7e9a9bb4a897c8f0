use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::status::NutritionStatus;

/// Per-center child counts by current status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CenterStatusCounts {
    pub awc_center: String,
    pub sam_count: u64,
    pub mam_count: u64,
    pub normal_count: u64,
    pub total_count: u64,
}

impl CenterStatusCounts {
    pub fn new(awc_center: impl Into<String>) -> Self {
        Self {
            awc_center: awc_center.into(),
            ..Default::default()
        }
    }

    pub fn add(&mut self, status: NutritionStatus, count: u64) {
        match status {
            NutritionStatus::Sam => self.sam_count += count,
            NutritionStatus::Mam => self.mam_count += count,
            NutritionStatus::Normal => self.normal_count += count,
        }
        self.total_count += count;
    }

    pub fn count(&self, status: NutritionStatus) -> u64 {
        match status {
            NutritionStatus::Sam => self.sam_count,
            NutritionStatus::Mam => self.mam_count,
            NutritionStatus::Normal => self.normal_count,
        }
    }
}
