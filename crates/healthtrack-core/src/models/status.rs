use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{MAX_PROBABILITY_DECIMALS, PROBABILITY_SUM_TOLERANCE};
use crate::errors::ValidationError;

/// Nutrition classification, most severe first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NutritionStatus {
    /// Severe Acute Malnutrition.
    Sam,
    /// Moderate Acute Malnutrition.
    Mam,
    #[default]
    Normal,
}

impl NutritionStatus {
    pub const ALL: [NutritionStatus; 3] = [Self::Sam, Self::Mam, Self::Normal];

    /// Storage form: `sam`, `mam`, `normal`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sam => "sam",
            Self::Mam => "mam",
            Self::Normal => "normal",
        }
    }

    /// Display label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sam => "SAM",
            Self::Mam => "MAM",
            Self::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for NutritionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NutritionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sam" => Ok(Self::Sam),
            "mam" => Ok(Self::Mam),
            "normal" => Ok(Self::Normal),
            other => Err(ValidationError::InvalidFormat {
                field: "status".to_string(),
                reason: format!("unknown status '{other}'"),
            }),
        }
    }
}

/// Probability triple over the three classes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusProbabilities {
    pub sam: f64,
    pub mam: f64,
    pub normal: f64,
}

impl StatusProbabilities {
    pub fn new(sam: f64, mam: f64, normal: f64) -> Self {
        Self { sam, mam, normal }
    }

    pub fn sum(&self) -> f64 {
        self.sam + self.mam + self.normal
    }

    pub fn get(&self, status: NutritionStatus) -> f64 {
        match status {
            NutritionStatus::Sam => self.sam,
            NutritionStatus::Mam => self.mam,
            NutritionStatus::Normal => self.normal,
        }
    }

    /// Finite, non-negative, and summing to one within
    /// `PROBABILITY_SUM_TOLERANCE`.
    pub fn is_distribution(&self) -> bool {
        let parts = [self.sam, self.mam, self.normal];
        parts.iter().all(|p| p.is_finite() && *p >= 0.0)
            && (self.sum() - 1.0).abs() <= PROBABILITY_SUM_TOLERANCE
    }

    /// Divide each component by the total. Returns `None` when the total is
    /// not a positive finite number.
    pub fn normalized(&self) -> Option<Self> {
        let total = self.sum();
        if !total.is_finite() || total <= 0.0 {
            return None;
        }
        Some(Self::new(self.sam / total, self.mam / total, self.normal / total))
    }

    /// Highest-probability class. Strict comparisons in SAM, MAM, Normal
    /// order: SAM needs to beat both others, MAM needs to beat Normal.
    pub fn most_likely(&self) -> NutritionStatus {
        if self.sam > self.mam && self.sam > self.normal {
            NutritionStatus::Sam
        } else if self.mam > self.normal {
            NutritionStatus::Mam
        } else {
            NutritionStatus::Normal
        }
    }

    /// Round every component to `decimals` places (half away from zero),
    /// capped at [`MAX_PROBABILITY_DECIMALS`].
    pub fn rounded(&self, decimals: u32) -> Self {
        let factor = 10f64.powi(decimals.min(MAX_PROBABILITY_DECIMALS) as i32);
        let round = |v: f64| (v * factor).round() / factor;
        Self::new(round(self.sam), round(self.mam), round(self.normal))
    }
}

/// Output of the status predictor: a class and its probability triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prediction {
    pub status: NutritionStatus,
    pub probabilities: StatusProbabilities,
}
