/// Identity-provider errors. Messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,

    #[error("User already registered: {email}")]
    AlreadyRegistered { email: String },

    #[error("Password should be at least {min_length} characters")]
    WeakPassword { min_length: usize },

    #[error("Unable to validate email address: {email}")]
    InvalidEmail { email: String },

    #[error("Session expired, please sign in again")]
    SessionExpired,

    #[error("Authentication provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },
}
