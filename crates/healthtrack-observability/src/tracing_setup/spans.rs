//! Span definitions per operation: prediction, storage, auth.

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($child_id:expr) => {
        tracing::info_span!("healthtrack.prediction", child_id = %$child_id)
    };
}

/// Create a storage span.
#[macro_export]
macro_rules! storage_span {
    ($operation:expr) => {
        tracing::debug_span!("healthtrack.storage", operation = %$operation)
    };
}

/// Create an auth span.
#[macro_export]
macro_rules! auth_span {
    ($action:expr) => {
        tracing::info_span!("healthtrack.auth", action = %$action)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREDICTION: &str = "healthtrack.prediction";
    pub const STORAGE: &str = "healthtrack.storage";
    pub const AUTH: &str = "healthtrack.auth";
}
