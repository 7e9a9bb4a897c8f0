use healthtrack_core::errors::*;

#[test]
fn child_not_found_carries_id() {
    let err = HealthTrackError::ChildNotFound {
        id: "child-123".into(),
    };
    assert!(err.to_string().contains("child-123"));
}

#[test]
fn access_denied_carries_both_roles() {
    let err = HealthTrackError::AccessDenied {
        required: "admin".into(),
        actual: "healthworker".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("admin"));
    assert!(msg.contains("healthworker"));
}

#[test]
fn missing_center_message_is_user_facing() {
    assert_eq!(
        HealthTrackError::MissingCenter.to_string(),
        "AWC Center not found for your account"
    );
}

// --- From impls ---

#[test]
fn storage_error_converts() {
    let err: HealthTrackError = StorageError::SqliteError {
        message: "disk full".into(),
    }
    .into();
    assert!(matches!(err, HealthTrackError::StorageError(_)));
}

#[test]
fn validation_error_converts() {
    let err: HealthTrackError = ValidationError::missing("name").into();
    assert!(matches!(err, HealthTrackError::ValidationError(_)));
    assert!(err.to_string().contains("name is required"));
}

#[test]
fn auth_error_converts() {
    let err: HealthTrackError = AuthError::InvalidCredentials.into();
    assert!(matches!(
        err,
        HealthTrackError::AuthError(AuthError::InvalidCredentials)
    ));
}

// --- Sub-error variants carry context ---

#[test]
fn migration_failed_carries_version() {
    let err = StorageError::MigrationFailed {
        version: 3,
        reason: "syntax error".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('3'));
    assert!(msg.contains("syntax error"));
}

#[test]
fn out_of_range_carries_field_and_value() {
    let err = ValidationError::out_of_range("poverty_index", 11, "between 0 and 10");
    let msg = err.to_string();
    assert!(msg.contains("poverty_index"));
    assert!(msg.contains("11"));
    assert!(msg.contains("between 0 and 10"));
}

#[test]
fn weak_password_mentions_minimum() {
    let err = AuthError::WeakPassword { min_length: 6 };
    assert!(err.to_string().contains('6'));
}
