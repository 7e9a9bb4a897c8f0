pub mod auth_error;
pub mod storage_error;
pub mod validation_error;

pub use auth_error::AuthError;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum HealthTrackError {
    #[error("child not found: {id}")]
    ChildNotFound { id: String },

    #[error("health worker not found: {key}")]
    HealthWorkerNotFound { key: String },

    #[error("access denied: requires role {required}, signed in as {actual}")]
    AccessDenied { required: String, actual: String },

    #[error("not signed in")]
    NotSignedIn,

    #[error("AWC Center not found for your account")]
    MissingCenter,

    #[error("validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("auth error: {0}")]
    AuthError(#[from] AuthError),

    #[error("config error: {0}")]
    ConfigError(String),
}

impl From<toml::de::Error> for HealthTrackError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

pub type HealthTrackResult<T> = Result<T, HealthTrackError>;
