//! Integration tests for the local position extrapolation.
//!
//! All tests run on a paused tokio clock so tick timing is exact.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use tonearm::cli::formatting::format_position;
use tonearm::services::playback::{PositionTracker, TICK_INTERVAL, progress_ratio};

/// Let the freshly spawned ticker reach its first await point.
async fn settle() {
    tokio::task::yield_now().await;
}

/// Advance the paused clock by `n` tick periods, letting the ticker run
/// after each one.
async fn advance_ticks(n: u32) {
    for _ in 0..n {
        tokio::time::advance(TICK_INTERVAL).await;
        tokio::task::yield_now().await;
    }
}

mod extrapolation {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn advances_by_exactly_one_step_per_tick() {
        let mut tracker = PositionTracker::new(Duration::ZERO);
        tracker.sync(false, Duration::ZERO);
        settle().await;

        advance_ticks(3).await;

        assert_eq!(tracker.displayed.get(), Duration::from_millis(1200));
    }

    #[tokio::test(start_paused = true)]
    async fn three_ticks_from_track_start_display_one_second() {
        let duration = Duration::from_millis(180_000);
        let mut tracker = PositionTracker::new(Duration::ZERO);
        tracker.sync(false, Duration::ZERO);
        settle().await;

        advance_ticks(3).await;

        let displayed = tracker.displayed.get();
        assert_eq!(displayed, Duration::from_millis(1200));
        assert_eq!(format_position(displayed), "00:01");
        assert!(progress_ratio(displayed, duration) < 0.01);
    }

    #[tokio::test(start_paused = true)]
    async fn does_not_advance_before_first_sync() {
        let tracker = PositionTracker::new(Duration::from_secs(10));

        advance_ticks(5).await;

        assert_eq!(tracker.displayed.get(), Duration::from_secs(10));
    }
}

mod pause {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn holds_steady_while_paused() {
        let mut tracker = PositionTracker::new(Duration::ZERO);
        tracker.sync(false, Duration::ZERO);
        settle().await;
        advance_ticks(2).await;
        assert_eq!(tracker.displayed.get(), Duration::from_millis(800));

        tracker.sync(true, Duration::from_millis(800));
        advance_ticks(5).await;

        assert_eq!(tracker.displayed.get(), Duration::from_millis(800));
    }

    #[tokio::test(start_paused = true)]
    async fn restarts_cleanly_after_pause_resume_with_same_position() {
        let position = Duration::from_millis(4000);
        let mut tracker = PositionTracker::new(position);
        tracker.sync(false, position);
        settle().await;

        tracker.sync(true, position);
        tracker.sync(false, position);
        settle().await;

        assert_eq!(tracker.displayed.get(), position);

        // A duplicate ticker would add two steps here instead of one.
        advance_ticks(1).await;
        assert_eq!(tracker.displayed.get(), position + TICK_INTERVAL);
    }
}

mod authoritative_reset {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn snapshot_overwrites_extrapolated_value() {
        let mut tracker = PositionTracker::new(Duration::ZERO);
        tracker.sync(false, Duration::ZERO);
        settle().await;
        advance_ticks(2).await;
        assert_eq!(tracker.displayed.get(), Duration::from_millis(800));

        tracker.sync(false, Duration::from_millis(5000));
        settle().await;

        assert_eq!(tracker.displayed.get(), Duration::from_millis(5000));

        advance_ticks(1).await;
        assert_eq!(tracker.displayed.get(), Duration::from_millis(5400));
    }
}

mod rendering {
    use super::*;

    #[test]
    fn ratio_clamps_when_displayed_runs_past_duration() {
        let ratio = progress_ratio(Duration::from_secs(200), Duration::from_secs(100));
        assert!((ratio - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_is_zero_for_zero_duration() {
        let ratio = progress_ratio(Duration::from_secs(5), Duration::ZERO);
        assert!((ratio - 0.0).abs() < f64::EPSILON);
    }
}
