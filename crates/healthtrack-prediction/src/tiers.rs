//! Severity tiers and their per-class draw ranges.

use serde::{Deserialize, Serialize};

use healthtrack_core::models::{Measurements, NutritionStatus};

/// BMI below this is severe.
pub const SEVERE_BMI: f64 = 16.0;
/// BMI below this is at least moderate.
pub const MODERATE_BMI: f64 = 18.5;
/// Poverty or sanitation index above this is severe.
pub const SEVERE_INDEX: u8 = 7;
/// Poverty or sanitation index above this is at least moderate.
pub const MODERATE_INDEX: u8 = 5;
/// Fewer meals than this is severe.
pub const SEVERE_MIN_MEALS: u32 = 2;
/// Fewer meals than this is at least moderate.
pub const MODERATE_MIN_MEALS: u32 = 3;

/// Closed interval a class probability is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRange {
    pub lo: f64,
    pub hi: f64,
}

impl DrawRange {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Map a unit sample onto the range. Non-finite samples count as 0.
    pub fn sample(&self, unit: f64) -> f64 {
        let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
        self.lo + unit * (self.hi - self.lo)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lo && value <= self.hi
    }
}

/// Draw ranges for SAM, MAM and Normal within one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierRanges {
    pub sam: DrawRange,
    pub mam: DrawRange,
    pub normal: DrawRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Severe,
    Moderate,
    Normal,
}

impl SeverityTier {
    /// Rule cascade, evaluated in order.
    pub fn classify(measurements: &Measurements) -> Self {
        let bmi = measurements.bmi();
        let poverty = measurements.poverty_index;
        let sanitation = measurements.sanitation_index;
        let meals = measurements.meals_per_day;

        if measurements.edema
            || bmi < SEVERE_BMI
            || poverty > SEVERE_INDEX
            || sanitation > SEVERE_INDEX
            || meals < SEVERE_MIN_MEALS
        {
            Self::Severe
        } else if bmi < MODERATE_BMI
            || poverty > MODERATE_INDEX
            || sanitation > MODERATE_INDEX
            || meals < MODERATE_MIN_MEALS
        {
            Self::Moderate
        } else {
            Self::Normal
        }
    }

    pub fn ranges(self) -> TierRanges {
        match self {
            Self::Severe => TierRanges {
                sam: DrawRange::new(0.70, 0.95),
                mam: DrawRange::new(0.20, 0.35),
                normal: DrawRange::new(0.10, 0.20),
            },
            Self::Moderate => TierRanges {
                sam: DrawRange::new(0.10, 0.25),
                mam: DrawRange::new(0.60, 0.85),
                normal: DrawRange::new(0.30, 0.50),
            },
            Self::Normal => TierRanges {
                sam: DrawRange::new(0.05, 0.15),
                mam: DrawRange::new(0.15, 0.30),
                normal: DrawRange::new(0.80, 0.95),
            },
        }
    }

    /// The class this tier favours.
    pub fn leaning(self) -> NutritionStatus {
        match self {
            Self::Severe => NutritionStatus::Sam,
            Self::Moderate => NutritionStatus::Mam,
            Self::Normal => NutritionStatus::Normal,
        }
    }
}
