use healthtrack_core::config::ObservabilityConfig;
use healthtrack_observability::tracing_setup::spans::names;
use healthtrack_observability::{default_filter, events, init_tracing};

#[test]
fn default_filter_scopes_to_workspace_crates() {
    let config = ObservabilityConfig::default();
    assert_eq!(default_filter(&config), "healthtrack=info");

    let config = ObservabilityConfig {
        log_level: " DEBUG ".to_string(),
        json_logs: true,
    };
    assert_eq!(default_filter(&config), "healthtrack=debug");
}

#[test]
fn init_is_idempotent() {
    let config = ObservabilityConfig::default();
    init_tracing(&config);
    init_tracing(&ObservabilityConfig {
        json_logs: true,
        ..config
    });
}

#[test]
fn events_emit_without_subscriber() {
    events::child_registered("c-1", "AWC-1", 3);
    events::health_record_created("r-1", "c-1", "sam");
    events::status_predicted("mam", 0.2, 0.5, 0.3);
    events::health_worker_registered("w-1", "health001", "AWC-1");
    events::auth_state_changed(Some("u-1"), true);
    events::auth_state_changed(None, false);
    events::data_access_failed("list_children", "disk full");
}

#[test]
fn spans_carry_expected_names() {
    let span = healthtrack_observability::prediction_span!("c-1");
    let _guard = span.enter();
    let storage = healthtrack_observability::storage_span!("insert_child");
    let auth = healthtrack_observability::auth_span!("sign_in");

    let name = |s: &tracing::Span| s.metadata().map(|m| m.name());
    assert_eq!(name(&span), Some(names::PREDICTION));
    assert_eq!(name(&storage), Some(names::STORAGE));
    assert_eq!(name(&auth), Some(names::AUTH));
    assert_eq!(names::PREDICTION, "healthtrack.prediction");
}
