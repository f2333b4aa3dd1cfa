//! Unit tests for configuration parsing and derivation.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use super::Config;

#[test]
fn defaults_apply_for_empty_toml() {
    let config = Config::from_toml("").unwrap();

    assert_eq!(config.connect.poll_interval_ms, 1000);
    assert!(config.connect.access_token.is_empty());
    assert!((config.player.volume - 0.5).abs() < f64::EPSILON);
}

#[test]
fn parses_full_config() {
    let config = Config::from_toml(
        r#"
[connect]
api_url = "https://api.example.com/v1/"
access_token = "token-123"
device_name = "Kitchen"
track = "spotify:track:4uLU6hMCjMI75M1A2tKUQC"
poll_interval_ms = 400

[player]
volume = 0.8
"#,
    )
    .unwrap();

    assert_eq!(config.connect.device_name, "Kitchen");
    assert_eq!(config.connect.poll_interval_ms, 400);

    let settings = config.connect_settings();
    assert_eq!(settings.poll_interval, Duration::from_millis(400));

    let session = config.session_config();
    assert_eq!(
        session.track.unwrap().as_str(),
        "spotify:track:4uLU6hMCjMI75M1A2tKUQC"
    );
    assert!((session.volume.as_percentage() - 80.0).abs() < 1e-9);
}

#[test]
fn empty_track_maps_to_none() {
    let config = Config::from_toml("[connect]\ntrack = \"\"\n").unwrap();
    assert!(config.session_config().track.is_none());
}

#[test]
fn volume_is_clamped_into_range() {
    let config = Config::from_toml("[player]\nvolume = 1.7\n").unwrap();
    assert!((*config.session_config().volume - 1.0).abs() < f64::EPSILON);
}

#[test]
fn malformed_toml_is_an_error() {
    assert!(Config::from_toml("[connect\napi_url = 3").is_err());
}
