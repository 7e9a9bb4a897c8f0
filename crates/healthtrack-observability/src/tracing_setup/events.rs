//! Structured log events for key application operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a child registration.
pub fn child_registered(child_id: &str, awc_center: &str, age_years: u32) {
    tracing::info!(
        event = "child_registered",
        child_id = %child_id,
        awc_center = %awc_center,
        age_years = age_years,
        "child registered"
    );
}

/// Log a stored health record.
pub fn health_record_created(record_id: &str, child_id: &str, status: &str) {
    tracing::info!(
        event = "health_record_created",
        record_id = %record_id,
        child_id = %child_id,
        status = %status,
        "health record created"
    );
}

/// Log a prediction outcome.
pub fn status_predicted(status: &str, sam: f64, mam: f64, normal: f64) {
    tracing::info!(
        event = "status_predicted",
        status = %status,
        sam = sam,
        mam = mam,
        normal = normal,
        "nutrition status predicted"
    );
}

/// Log a new health-worker account.
pub fn health_worker_registered(worker_id: &str, username: &str, awc_center: &str) {
    tracing::info!(
        event = "health_worker_registered",
        worker_id = %worker_id,
        username = %username,
        awc_center = %awc_center,
        "health worker registered"
    );
}

/// Log a sign-in or sign-out seen by the auth listener.
pub fn auth_state_changed(user_id: Option<&str>, signed_in: bool) {
    tracing::info!(
        event = "auth_state_changed",
        user_id = user_id.unwrap_or("-"),
        signed_in = signed_in,
        "auth state changed"
    );
}

/// Log a failed data-access call that was surfaced to the user.
pub fn data_access_failed(operation: &str, error: &str) {
    tracing::warn!(
        event = "data_access_failed",
        operation = %operation,
        error = %error,
        "data access failed"
    );
}
