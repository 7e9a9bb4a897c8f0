use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::status::NutritionStatus;
use crate::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(ValidationError::InvalidFormat {
                field: "gender".to_string(),
                reason: format!("unknown gender '{other}'"),
            }),
        }
    }
}

/// A registered child. `current_status` mirrors the latest health record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Child {
    /// UUID v4 identifier.
    pub id: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub guardian_name: String,
    pub city: String,
    pub district: String,
    /// Anganwadi center the child is registered under.
    pub awc_center: String,
    /// Health worker who registered the child.
    pub healthworker_id: Option<String>,
    pub current_status: NutritionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Child {
    /// Age in completed years on `today`.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        age_in_years(self.date_of_birth, today)
    }
}

/// Identity equality, same as other stored entities.
impl PartialEq for Child {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Completed years between `birth` and `today`. Zero for future birth dates.
pub fn age_in_years(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Fields supplied when registering a child.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewChild {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub guardian_name: String,
    pub city: String,
    pub district: String,
    pub awc_center: String,
    pub healthworker_id: Option<String>,
}
