use encuesta_desktop::config::{CURRENT_VERSION, DEFAULT_API_BASE_URL, migrate};
use serde_json::json;

// Points the config directory at a tempdir via XDG_CONFIG_HOME; the only
// test in this binary that touches the filesystem.
#[cfg(target_os = "linux")]
#[test]
fn save_load_delete_round_trip() {
    use encuesta_desktop::config::{self, EncuestaConfig};

    let dir = tempfile::tempdir().unwrap();
    unsafe { std::env::set_var("XDG_CONFIG_HOME", dir.path()) };

    assert!(!config::has_config());

    let cfg = EncuestaConfig {
        config_version: CURRENT_VERSION,
        api_base_url: "https://encuestas.example.cl".to_string(),
        created_at: jiff::Timestamp::now(),
        remember_user: Some("mrojas".to_string()),
    };
    config::save_config(&cfg).unwrap();
    assert!(config::has_config());

    let loaded = config::load_config().unwrap();
    assert_eq!(loaded.api_base_url, cfg.api_base_url);
    assert_eq!(loaded.remember_user, cfg.remember_user);

    config::delete_config().unwrap();
    assert!(!config::has_config());
    // deleting twice is not an error
    config::delete_config().unwrap();
}

#[test]
fn migrates_v0_to_v1_adding_api_base_url() {
    let v0 = json!({
        "created_at": "2025-06-01T12:00:00Z"
    });

    let migrated = migrate(v0, 0).unwrap();

    assert_eq!(migrated["config_version"], CURRENT_VERSION);
    assert_eq!(migrated["api_base_url"], DEFAULT_API_BASE_URL);
    assert_eq!(migrated["created_at"], "2025-06-01T12:00:00Z");
}

#[test]
fn migration_keeps_existing_api_base_url() {
    let v0 = json!({
        "created_at": "2025-06-01T12:00:00Z",
        "api_base_url": "https://encuestas.example.cl"
    });

    let migrated = migrate(v0, 0).unwrap();

    assert_eq!(migrated["api_base_url"], "https://encuestas.example.cl");
}

#[test]
fn current_version_is_untouched() {
    let current = json!({
        "config_version": CURRENT_VERSION,
        "api_base_url": "https://encuestas.example.cl",
        "created_at": "2025-06-01T12:00:00Z"
    });

    let migrated = migrate(current.clone(), CURRENT_VERSION).unwrap();
    assert_eq!(migrated, current);
}

#[test]
fn rejects_config_from_a_newer_build() {
    let future = json!({
        "config_version": CURRENT_VERSION + 1,
        "api_base_url": "https://encuestas.example.cl",
        "created_at": "2025-06-01T12:00:00Z"
    });

    let err = migrate(future, CURRENT_VERSION + 1).unwrap_err();
    assert!(err.to_string().contains("newer than this build"));
}

#[test]
fn rejects_non_object_config() {
    assert!(migrate(json!([1, 2, 3]), 0).is_err());
}
