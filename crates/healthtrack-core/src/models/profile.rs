use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::ValidationError;

/// Authorization role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "healthworker")]
    HealthWorker,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::HealthWorker => "healthworker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Self::Admin),
            "healthworker" => Ok(Self::HealthWorker),
            other => Err(ValidationError::InvalidFormat {
                field: "role".to_string(),
                reason: format!("unknown role '{other}'"),
            }),
        }
    }
}

/// Authorization identity stored alongside an identity-provider user.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Profile {
    pub id: String,
    /// Identity-provider user id.
    pub user_id: String,
    pub role: Role,
    pub full_name: String,
    pub username: Option<String>,
    pub awc_center: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub user_id: String,
    pub role: Role,
    pub full_name: String,
    pub username: Option<String>,
    pub awc_center: Option<String>,
}
