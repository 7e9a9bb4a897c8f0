//! Role checks in front of every screen.

use healthtrack_core::errors::{HealthTrackError, HealthTrackResult};
use healthtrack_core::models::{CurrentUser, Role};

pub fn require_user(user: Option<CurrentUser>) -> HealthTrackResult<CurrentUser> {
    user.ok_or(HealthTrackError::NotSignedIn)
}

pub fn require_role(user: &CurrentUser, role: Role) -> HealthTrackResult<()> {
    if user.role == role {
        Ok(())
    } else {
        Err(HealthTrackError::AccessDenied {
            required: role.to_string(),
            actual: user.role.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(role: Role) -> CurrentUser {
        CurrentUser {
            id: "u-1".to_string(),
            email: "u@example.org".to_string(),
            username: None,
            role,
            full_name: "U".to_string(),
            awc_center: None,
        }
    }

    #[test]
    fn matching_role_passes() {
        assert!(require_role(&make_user(Role::Admin), Role::Admin).is_ok());
        assert!(require_role(&make_user(Role::HealthWorker), Role::HealthWorker).is_ok());
    }

    #[test]
    fn wrong_role_is_denied() {
        let err = require_role(&make_user(Role::HealthWorker), Role::Admin).unwrap_err();
        assert!(matches!(
            err,
            HealthTrackError::AccessDenied { ref required, ref actual }
                if required == "admin" && actual == "healthworker"
        ));
    }

    #[test]
    fn anonymous_is_not_signed_in() {
        assert!(matches!(require_user(None), Err(HealthTrackError::NotSignedIn)));
        assert!(require_user(Some(make_user(Role::Admin))).is_ok());
    }
}
