//! Unit tests for CLI formatting and argument parsing.
//!
//! No external dependencies or actual command execution.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use crate::cli::CliError;
use crate::cli::commands::player::{SeekCommand, VolumeCommand};
use crate::cli::formatting::{format_position, render_progress_bar, render_volume_bar};
use crate::services::playback::Volume;

#[test]
fn format_position_zero() {
    assert_eq!(format_position(Duration::ZERO), "00:00");
}

#[test]
fn format_position_floors_subsecond_values() {
    assert_eq!(format_position(Duration::from_millis(1200)), "00:01");
    assert_eq!(format_position(Duration::from_millis(999)), "00:00");
}

#[test]
fn format_position_does_not_roll_into_hours() {
    assert_eq!(format_position(Duration::from_secs(90 * 60)), "90:00");
    assert_eq!(format_position(Duration::from_secs(3 * 3600 + 7)), "180:07");
}

#[test]
fn format_position_round_trips_minute_second_pairs() {
    for &secs in &[0u64, 1, 59, 60, 61, 599, 3600, 86_399] {
        let text = format_position(Duration::from_secs(secs));
        let (minutes, seconds) = text.split_once(':').unwrap();
        let parsed = minutes.parse::<u64>().unwrap() * 60 + seconds.parse::<u64>().unwrap();
        assert_eq!(parsed, secs);
    }
}

#[test]
fn progress_bar_clamps_past_duration() {
    let bar = render_progress_bar(Duration::from_secs(200), Duration::from_secs(100), 10);
    assert_eq!(bar, "[==========]");
}

#[test]
fn progress_bar_handles_zero_duration() {
    let bar = render_progress_bar(Duration::from_secs(5), Duration::ZERO, 10);
    assert_eq!(bar, "[          ]");
}

#[test]
fn progress_bar_is_proportional() {
    let bar = render_progress_bar(Duration::from_secs(50), Duration::from_secs(100), 10);
    assert_eq!(bar, "[=====     ]");
}

#[test]
fn volume_bar_renders_percentage() {
    assert_eq!(render_volume_bar(Volume::new(0.5), 10), "[#####     ] 50%");
    assert_eq!(render_volume_bar(Volume::new(1.0), 4), "[####] 100%");
}

#[test]
fn seek_parses_plain_seconds() {
    let parsed =
        SeekCommand::parse_position("30", Duration::ZERO, Duration::from_secs(180)).unwrap();
    assert_eq!(parsed, Duration::from_secs(30));
}

#[test]
fn seek_parses_minute_second_format() {
    let parsed =
        SeekCommand::parse_position("1:30", Duration::ZERO, Duration::from_secs(180)).unwrap();
    assert_eq!(parsed, Duration::from_secs(90));
}

#[test]
fn seek_rejects_overflowing_seconds_field() {
    let result = SeekCommand::parse_position("1:75", Duration::ZERO, Duration::from_secs(180));
    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[test]
fn seek_parses_percentage_of_track_length() {
    let parsed =
        SeekCommand::parse_position("50%", Duration::ZERO, Duration::from_secs(180)).unwrap();
    assert_eq!(parsed, Duration::from_secs(90));
}

#[test]
fn seek_percentage_needs_known_length() {
    let result = SeekCommand::parse_position("50%", Duration::ZERO, Duration::ZERO);
    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[test]
fn seek_parses_relative_offsets() {
    let current = Duration::from_secs(60);
    let forward =
        SeekCommand::parse_position("+10", current, Duration::from_secs(180)).unwrap();
    assert_eq!(forward, Duration::from_secs(70));

    let back = SeekCommand::parse_position("-90", current, Duration::from_secs(180)).unwrap();
    assert_eq!(back, Duration::ZERO);
}

#[test]
fn seek_rejects_garbage() {
    let result = SeekCommand::parse_position("later", Duration::ZERO, Duration::from_secs(180));
    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[test]
fn volume_parses_and_clamps_percent() {
    let volume = VolumeCommand::parse_percent("80").unwrap();
    assert!((volume.as_percentage() - 80.0).abs() < 1e-9);

    assert!(VolumeCommand::parse_percent("101").is_err());
    assert!(VolumeCommand::parse_percent("-1").is_err());
    assert!(VolumeCommand::parse_percent("loud").is_err());
}
