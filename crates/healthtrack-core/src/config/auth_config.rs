use serde::{Deserialize, Serialize};

use super::defaults;

/// Authentication and credential-issuing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Prefix for generated health-worker usernames (`health001`, ...).
    pub username_prefix: String,
    /// Length of generated passwords.
    pub generated_password_length: usize,
    /// Minimum password length accepted at sign-up.
    pub min_password_length: usize,
    /// Lifetime of an issued session in seconds.
    pub session_ttl_secs: u64,
    /// Full name used for auto-created profiles when sign-up metadata has none.
    pub default_full_name: String,
    /// Domain for accounts issued to health workers (`health001@<domain>`).
    pub account_email_domain: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username_prefix: defaults::DEFAULT_USERNAME_PREFIX.to_string(),
            generated_password_length: defaults::DEFAULT_GENERATED_PASSWORD_LENGTH,
            min_password_length: defaults::DEFAULT_MIN_PASSWORD_LENGTH,
            session_ttl_secs: defaults::DEFAULT_SESSION_TTL_SECS,
            default_full_name: defaults::DEFAULT_PROFILE_FULL_NAME.to_string(),
            account_email_domain: defaults::DEFAULT_ACCOUNT_EMAIL_DOMAIN.to_string(),
        }
    }
}
