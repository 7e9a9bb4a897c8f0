//! Raw form input, validated into domain values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use healthtrack_core::errors::ValidationError;
use healthtrack_core::models::{Gender, Measurements};

/// Child registration form. Every field is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChildRegistration {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub date_of_birth: String,
    pub gender: String,
    pub guardian_name: String,
    pub city: String,
    pub district: String,
}

/// A validated registration.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRegistration {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Gender,
    pub guardian_name: String,
    pub city: String,
    pub district: String,
}

fn required(field: &str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::missing(field))
    } else {
        Ok(value.to_string())
    }
}

impl ChildRegistration {
    pub fn validate(&self, today: NaiveDate) -> Result<ValidRegistration, ValidationError> {
        let name = required("name", &self.name)?;
        let dob = required("date_of_birth", &self.date_of_birth)?;
        let gender = required("gender", &self.gender)?;
        let guardian_name = required("guardian_name", &self.guardian_name)?;
        let city = required("city", &self.city)?;
        let district = required("district", &self.district)?;

        let date_of_birth = NaiveDate::parse_from_str(&dob, "%Y-%m-%d").map_err(|e| {
            ValidationError::InvalidFormat {
                field: "date_of_birth".to_string(),
                reason: e.to_string(),
            }
        })?;
        if date_of_birth > today {
            return Err(ValidationError::out_of_range(
                "date_of_birth",
                date_of_birth,
                "a date not in the future",
            ));
        }

        Ok(ValidRegistration {
            name,
            date_of_birth,
            gender: gender.parse()?,
            guardian_name,
            city,
            district,
        })
    }
}

/// Health-record form as typed into the visit screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeasurementForm {
    pub height: String,
    pub weight: String,
    pub edema: bool,
    pub poverty_index: String,
    pub sanitation_index: String,
    pub meals_per_day: String,
}

fn parse_field<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, ValidationError>
where
    T::Err: std::fmt::Display,
{
    let value = required(field, value)?;
    value.parse().map_err(|e: T::Err| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

impl MeasurementForm {
    pub fn parse(&self) -> Result<Measurements, ValidationError> {
        let measurements = Measurements {
            height_cm: parse_field("height", &self.height)?,
            weight_kg: parse_field("weight", &self.weight)?,
            edema: self.edema,
            poverty_index: parse_field("poverty_index", &self.poverty_index)?,
            sanitation_index: parse_field("sanitation_index", &self.sanitation_index)?,
            meals_per_day: parse_field("meals_per_day", &self.meals_per_day)?,
        };
        measurements.validate()?;
        Ok(measurements)
    }
}
