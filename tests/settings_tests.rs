//! Integration tests for settings resolution
//!
//! Environment variables are process-wide, so every test here serializes on
//! the shared test lock.

mod common;
use common::lock_test;

use omikuji_cli::core::load_settings;

const SERVER_ENV_VAR: &str = "OMIKUJI_SERVER";
const DURATION_ENV_VAR: &str = "OMIKUJI_DRAW_MS";

#[test]
fn test_env_var_supplies_server_url() {
    let _lock = lock_test();
    std::env::set_var(SERVER_ENV_VAR, "http://draw.example.org:9090");

    let settings = load_settings(None, None).expect("settings should resolve");
    assert_eq!(settings.server_url.as_str(), "http://draw.example.org:9090/");

    std::env::remove_var(SERVER_ENV_VAR);
}

#[test]
fn test_flag_overrides_env_var() {
    let _lock = lock_test();
    std::env::set_var(SERVER_ENV_VAR, "http://env.example.org");

    let settings =
        load_settings(Some("http://flag.example.org"), None).expect("settings should resolve");
    assert_eq!(settings.server_url.as_str(), "http://flag.example.org/");

    std::env::remove_var(SERVER_ENV_VAR);
}

#[test]
fn test_duration_env_var_feeds_override() {
    let _lock = lock_test();
    std::env::set_var(DURATION_ENV_VAR, "1500");

    let settings =
        load_settings(Some("http://localhost:8000"), None).expect("settings should resolve");
    assert_eq!(settings.duration_override.as_deref(), Some("1500"));

    std::env::remove_var(DURATION_ENV_VAR);
}

#[test]
fn test_duration_flag_overrides_env_var() {
    let _lock = lock_test();
    std::env::set_var(DURATION_ENV_VAR, "1500");

    let settings = load_settings(Some("http://localhost:8000"), Some("250"))
        .expect("settings should resolve");
    assert_eq!(settings.duration_override.as_deref(), Some("250"));

    std::env::remove_var(DURATION_ENV_VAR);
}

#[test]
fn test_invalid_duration_env_var_is_kept_raw() {
    let _lock = lock_test();
    std::env::set_var(DURATION_ENV_VAR, "soon");

    // Settings resolution does not judge the value; the defaulting rule
    // lives in resolve_duration so every source is treated the same
    let settings =
        load_settings(Some("http://localhost:8000"), None).expect("settings should resolve");
    assert_eq!(settings.duration_override.as_deref(), Some("soon"));
    assert_eq!(
        omikuji_cli::sequencer::resolve_duration(settings.duration_override.as_deref()),
        3000
    );

    std::env::remove_var(DURATION_ENV_VAR);
}
