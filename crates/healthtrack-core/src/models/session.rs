use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::profile::{Profile, Role};

/// Metadata attached to an identity-provider user at sign-up.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub full_name: Option<String>,
    pub role: Option<Role>,
    pub awc_center: Option<String>,
}

/// A user as known to the identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    pub metadata: UserMetadata,
}

impl AuthUser {
    /// Local part of the email, used as the default username.
    pub fn email_local_part(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Sign-in credentials. `login` is an email or its local part.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub metadata: UserMetadata,
}

/// Session-change notification pushed by the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}

/// The signed-in user as seen by the application: auth identity + profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CurrentUser {
    /// Identity-provider user id.
    pub id: String,
    pub email: String,
    pub username: Option<String>,
    pub role: Role,
    pub full_name: String,
    pub awc_center: Option<String>,
}

impl CurrentUser {
    pub fn from_profile(user: &AuthUser, profile: &Profile) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            username: profile.username.clone(),
            role: profile.role,
            full_name: profile.full_name.clone(),
            awc_center: profile.awc_center.clone(),
        }
    }
}
