//! Operator control state for the running simulator.
//!
//! Shared between the simulator loop task and the HTTP handler tasks.
//! Atomic fields keep the loop's checks lock-free; the next-event
//! deadline sits behind a mutex because it pairs a flag with a
//! timestamp.
//!
//! The countdown shown to operators is derived from the same deadline
//! the loop sleeps against, so the displayed "time until next event"
//! can never drift from the timer that actually fires.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Notify;

/// Smallest accepted event interval in milliseconds.
const MIN_INTERVAL_MS: u64 = 1_000;

/// Shared simulator control state.
///
/// Wrapped in an `Arc` and shared between the simulator loop and the
/// HTTP handlers.
#[derive(Debug)]
pub struct SimControl {
    /// Whether the simulator is currently paused.
    paused: AtomicBool,

    /// Notification used to wake the loop when resumed.
    resume_notify: Notify,

    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Current event interval in milliseconds (runtime-adjustable).
    interval_ms: AtomicU64,

    /// Deadline of the next event, set by the loop before each sleep.
    next_event_at: Mutex<Option<DateTime<Utc>>>,

    /// Wall-clock time when the simulator started.
    started_at: DateTime<Utc>,
}

impl SimControl {
    /// Create control state with the given event interval.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            paused: AtomicBool::new(false),
            resume_notify: Notify::new(),
            stop_requested: AtomicBool::new(false),
            interval_ms: AtomicU64::new(interval_ms.max(MIN_INTERVAL_MS)),
            next_event_at: Mutex::new(None),
            started_at: Utc::now(),
        }
    }

    // -----------------------------------------------------------------------
    // Pause / Resume
    // -----------------------------------------------------------------------

    /// Check whether the simulator is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Pause the simulator. No event fires until resumed.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
        self.clear_next_event_at();
    }

    /// Resume the simulator and wake the loop.
    ///
    /// The loop restarts a full interval; no event fires immediately.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Wait until the simulator is no longer paused.
    ///
    /// Also returns when a stop is requested, so a paused loop can still
    /// shut down cleanly.
    pub async fn wait_if_paused(&self) {
        while self.paused.load(Ordering::Acquire) && !self.is_stop_requested() {
            self.resume_notify.notified().await;
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean simulator stop.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        // A paused loop must wake to observe the stop.
        self.resume_notify.notify_one();
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    // -----------------------------------------------------------------------
    // Interval
    // -----------------------------------------------------------------------

    /// Get the current event interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.load(Ordering::Acquire)
    }

    /// Set the event interval in milliseconds.
    ///
    /// Returns the previous interval on success, or `None` if the value
    /// was rejected (below one second). Takes effect from the next tick.
    pub fn set_interval_ms(&self, ms: u64) -> Option<u64> {
        if ms < MIN_INTERVAL_MS {
            return None;
        }
        Some(self.interval_ms.swap(ms, Ordering::AcqRel))
    }

    // -----------------------------------------------------------------------
    // Countdown
    // -----------------------------------------------------------------------

    /// Record the deadline the loop is about to sleep toward.
    pub fn set_next_event_at(&self, deadline: DateTime<Utc>) {
        let mut guard = self
            .next_event_at
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(deadline);
    }

    /// Clear the deadline (loop paused or stopped).
    pub fn clear_next_event_at(&self) {
        let mut guard = self
            .next_event_at
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Seconds until the next event fires, derived from the loop's own
    /// deadline. `None` while paused or before the first tick is armed.
    pub fn seconds_until_next_event(&self) -> Option<u64> {
        if self.is_paused() {
            return None;
        }
        let guard = self
            .next_event_at
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        guard.map(|deadline| {
            let remaining = deadline.signed_duration_since(Utc::now()).num_seconds();
            u64::try_from(remaining.max(0)).unwrap_or(u64::MAX)
        })
    }

    // -----------------------------------------------------------------------
    // Status
    // -----------------------------------------------------------------------

    /// Return the wall-clock start time.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Snapshot the control state for the operator API.
    pub fn status(&self) -> SimStatus {
        SimStatus {
            paused: self.is_paused(),
            stop_requested: self.is_stop_requested(),
            interval_ms: self.interval_ms(),
            seconds_until_next_event: self.seconds_until_next_event(),
            started_at: self.started_at.to_rfc3339(),
        }
    }
}

/// JSON-serializable simulator status for the operator API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimStatus {
    /// Whether the simulator is paused.
    pub paused: bool,
    /// Whether a stop has been requested.
    pub stop_requested: bool,
    /// Current event interval in milliseconds.
    pub interval_ms: u64,
    /// Seconds until the next event, when one is armed.
    pub seconds_until_next_event: Option<u64>,
    /// ISO 8601 timestamp of when the simulator started.
    pub started_at: String,
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_running() {
        let control = SimControl::new(300_000);
        assert!(!control.is_paused());
        assert!(!control.is_stop_requested());
        assert_eq!(control.interval_ms(), 300_000);
    }

    #[test]
    fn pause_and_resume() {
        let control = SimControl::new(300_000);
        control.pause();
        assert!(control.is_paused());
        control.resume();
        assert!(!control.is_paused());
    }

    #[test]
    fn interval_floor_is_one_second() {
        let control = SimControl::new(300_000);
        assert_eq!(control.set_interval_ms(500), None);
        assert_eq!(control.interval_ms(), 300_000);
        assert_eq!(control.set_interval_ms(60_000), Some(300_000));
        assert_eq!(control.interval_ms(), 60_000);
    }

    #[test]
    fn countdown_follows_the_armed_deadline() {
        let control = SimControl::new(300_000);
        assert_eq!(control.seconds_until_next_event(), None);

        control.set_next_event_at(Utc::now() + chrono::Duration::seconds(120));
        let remaining = control.seconds_until_next_event();
        assert!(remaining.is_some_and(|s| (118..=120).contains(&s)));
    }

    #[test]
    fn pausing_hides_the_countdown() {
        let control = SimControl::new(300_000);
        control.set_next_event_at(Utc::now() + chrono::Duration::seconds(60));
        control.pause();
        assert_eq!(control.seconds_until_next_event(), None);
    }

    #[test]
    fn expired_deadline_reports_zero() {
        let control = SimControl::new(300_000);
        control.set_next_event_at(Utc::now() - chrono::Duration::seconds(5));
        assert_eq!(control.seconds_until_next_event(), Some(0));
    }

    #[tokio::test]
    async fn wait_if_paused_returns_once_resumed() {
        use std::sync::Arc;

        let control = Arc::new(SimControl::new(300_000));
        control.pause();

        let waiter = {
            let control = Arc::clone(&control);
            tokio::spawn(async move { control.wait_if_paused().await })
        };
        tokio::task::yield_now().await;
        control.resume();
        assert!(waiter.await.is_ok());
    }
}
