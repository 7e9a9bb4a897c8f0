use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A field health worker assigned to one center.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthWorker {
    pub id: String,
    pub full_name: String,
    pub awc_center: String,
    /// Login name issued at registration.
    pub username: String,
    /// Identity-provider user this worker signs in as.
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHealthWorker {
    pub full_name: String,
    pub awc_center: String,
    pub username: String,
    pub user_id: Option<String>,
}
