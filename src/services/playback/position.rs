use std::time::Duration;

use tokio::task::JoinHandle;

use crate::services::common::Property;

/// Step and period of the local position clock.
///
/// Between authoritative snapshots the displayed position advances by
/// exactly this amount, once per period.
pub const TICK_INTERVAL: Duration = Duration::from_millis(400);

/// Fraction of the track covered by `displayed`, clamped to `[0.0, 1.0]`.
///
/// The displayed position can legitimately run past the reported duration
/// (extrapolation drift, or a near-zero duration before the first
/// snapshot); rendering clamps instead of failing.
pub fn progress_ratio(displayed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 0.0;
    }
    (displayed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}

/// Locally advancing estimate of the playback position.
///
/// The streaming service reports positions only on sparse state-change
/// events. The tracker keeps a displayed clock that is reset to the
/// authoritative position on every update and otherwise advances by
/// [`TICK_INTERVAL`] steps while playback is running. The displayed value
/// is a best-effort estimate and is always overwritten, never merged,
/// when an authoritative position arrives.
pub struct PositionTracker {
    /// Displayed playback position
    pub displayed: Property<Duration>,
    ticker: Option<JoinHandle<()>>,
}

impl PositionTracker {
    /// Create a tracker holding `initial` with no tick source running.
    pub fn new(initial: Duration) -> Self {
        Self {
            displayed: Property::new(initial),
            ticker: None,
        }
    }

    /// Re-evaluate the tracker against its inputs.
    ///
    /// Call whenever the pause state or the authoritative position
    /// changes. Any running tick source is cancelled first,
    /// unconditionally. When paused the displayed value holds steady;
    /// otherwise it is reset to `authoritative` and a new tick source is
    /// started. At most one tick source is ever active.
    pub fn sync(&mut self, is_paused: bool, authoritative: Duration) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }

        if is_paused {
            return;
        }

        self.displayed.set(authoritative);

        let displayed = self.displayed.clone();
        self.ticker = Some(tokio::spawn(async move {
            let mut ticks = tokio::time::interval(TICK_INTERVAL);
            // An interval fires immediately; consume that so the first
            // increment lands a full period after the reset.
            ticks.tick().await;
            loop {
                ticks.tick().await;
                displayed.set(displayed.get() + TICK_INTERVAL);
            }
        }));
    }
}

impl Drop for PositionTracker {
    fn drop(&mut self) {
        if let Some(ticker) = &self.ticker {
            ticker.abort();
        }
    }
}
