//! User-facing messages for operation outcomes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use healthtrack_core::errors::{HealthTrackError, HealthTrackResult};
use healthtrack_observability::events;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// Map a failed operation to its message. Storage and other internal
    /// failures are logged and shown as `failure_description`.
    pub fn from_error(err: &HealthTrackError, failure_description: &str) -> Self {
        match err {
            HealthTrackError::ValidationError(inner) => Self {
                title: "Validation Error".to_string(),
                description: inner.to_string(),
                variant: NotificationVariant::Destructive,
            },
            HealthTrackError::AuthError(inner) => Self::failure(inner.to_string()),
            HealthTrackError::MissingCenter => Self::failure(err.to_string()),
            HealthTrackError::AccessDenied { .. } | HealthTrackError::NotSignedIn => Self {
                title: "Access Denied".to_string(),
                description: err.to_string(),
                variant: NotificationVariant::Destructive,
            },
            _ => {
                events::data_access_failed(failure_description, &err.to_string());
                Self::failure(failure_description)
            }
        }
    }

    /// Success message for `Ok`, mapped error otherwise.
    pub fn for_result<T>(
        result: &HealthTrackResult<T>,
        success_description: &str,
        failure_description: &str,
    ) -> Self {
        match result {
            Ok(_) => Self::success(success_description),
            Err(e) => Self::from_error(e, failure_description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthtrack_core::errors::{AuthError, StorageError, ValidationError};

    #[test]
    fn validation_errors_get_their_own_title() {
        let err: HealthTrackError = ValidationError::missing("name").into();
        let n = Notification::from_error(&err, "Failed to register child");
        assert_eq!(n.title, "Validation Error");
        assert_eq!(n.description, "name is required");
        assert_eq!(n.variant, NotificationVariant::Destructive);
    }

    #[test]
    fn storage_errors_are_generic() {
        let err: HealthTrackError = StorageError::SqliteError {
            message: "disk I/O error".to_string(),
        }
        .into();
        let n = Notification::from_error(&err, "Failed to fetch children data");
        assert_eq!(n.title, "Error");
        assert_eq!(n.description, "Failed to fetch children data");
    }

    #[test]
    fn auth_and_center_messages_pass_through() {
        let n = Notification::from_error(&AuthError::InvalidCredentials.into(), "ignored");
        assert_eq!(n.description, "Invalid login credentials");

        let n = Notification::from_error(&HealthTrackError::MissingCenter, "ignored");
        assert_eq!(n.description, "AWC Center not found for your account");
    }

    #[test]
    fn ok_results_are_success() {
        let ok: HealthTrackResult<()> = Ok(());
        let n = Notification::for_result(&ok, "Child registered successfully", "Failed");
        assert_eq!(n.title, "Success");
        assert_eq!(n.variant, NotificationVariant::Default);
    }
}
