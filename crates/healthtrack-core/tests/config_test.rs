use healthtrack_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = HealthTrackConfig::from_toml("").unwrap();

    // Storage defaults
    assert_eq!(config.storage.db_path, "healthtrack.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert_eq!(config.storage.read_pool_size, 4);

    // Prediction defaults
    assert_eq!(config.prediction.random_seed, None);
    assert_eq!(config.prediction.probability_decimals, 4);

    // Auth defaults
    assert_eq!(config.auth.username_prefix, "health");
    assert_eq!(config.auth.generated_password_length, 8);
    assert_eq!(config.auth.min_password_length, 6);
    assert_eq!(config.auth.default_full_name, "User");
    assert_eq!(config.auth.account_email_domain, "healthtrack.local");

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/var/lib/healthtrack/data.db"

[prediction]
random_seed = 42

[auth]
username_prefix = "awc"
"#;
    let config = HealthTrackConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.db_path, "/var/lib/healthtrack/data.db");
    // Non-overridden fields keep defaults
    assert_eq!(config.storage.read_pool_size, 4);
    assert_eq!(config.prediction.random_seed, Some(42));
    assert_eq!(config.prediction.probability_decimals, 4);
    assert_eq!(config.auth.username_prefix, "awc");
    assert_eq!(config.auth.generated_password_length, 8);
}

#[test]
fn config_rejects_malformed_toml() {
    let err = HealthTrackConfig::from_toml("[storage\ndb_path = 1").unwrap_err();
    assert!(matches!(
        err,
        healthtrack_core::HealthTrackError::ConfigError(_)
    ));
}

#[test]
fn config_serde_roundtrip() {
    let mut config = HealthTrackConfig::default();
    config.prediction.random_seed = Some(7);
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = HealthTrackConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
    assert_eq!(roundtripped.prediction.random_seed, Some(7));
}
