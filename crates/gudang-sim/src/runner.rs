//! The simulator loop.
//!
//! [`run_simulator`] drives the repeating event timer: arm a deadline,
//! sleep until it fires, apply exactly one random event to the store,
//! and repeat. Pause, resume, interval changes, and stop all come in
//! through the shared [`SimControl`].
//!
//! One deadline drives both the real timer and the countdown the
//! operator API reports. Pausing mid-sleep discards the armed deadline;
//! resuming always restarts a full interval.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use gudang_store::Store;

use crate::control::SimControl;
use crate::cue;
use crate::draws::DrawSource;
use crate::event::{self, SimEvent};

/// Run the simulator loop until a stop is requested.
///
/// Each pass arms the next-event deadline on `control`, sleeps the
/// configured interval, then applies one random event under the store's
/// write lock. The lock is held only for the synchronous mutation, never
/// across a sleep.
pub async fn run_simulator(
    store: Arc<RwLock<Store>>,
    control: Arc<SimControl>,
    mut draws: Box<dyn DrawSource>,
) {
    info!(interval_ms = control.interval_ms(), "Simulator starting");

    loop {
        if control.is_paused() {
            info!("Simulator paused, waiting for resume...");
            control.wait_if_paused().await;
            if !control.is_stop_requested() {
                info!("Simulator resumed");
            }
        }

        if control.is_stop_requested() {
            control.clear_next_event_at();
            info!("Simulator stop requested");
            return;
        }

        let interval_ms = control.interval_ms();
        let deadline_offset =
            chrono::Duration::milliseconds(i64::try_from(interval_ms).unwrap_or(i64::MAX));
        control.set_next_event_at(Utc::now().checked_add_signed(deadline_offset).unwrap_or_else(Utc::now));

        tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;

        if control.is_stop_requested() {
            control.clear_next_event_at();
            info!("Simulator stop requested");
            return;
        }
        // Paused mid-sleep: discard this tick, re-arm after resume.
        if control.is_paused() {
            continue;
        }

        let today = Utc::now().date_naive();
        let event = {
            let mut guard = store.write().await;
            event::apply_random_event(&mut guard, draws.as_mut(), today)
        };

        match &event {
            SimEvent::Withdrawal {
                item_code,
                quantity,
                remaining,
            } => info!(%item_code, quantity, remaining, "Withdrawal event applied"),
            SimEvent::Order {
                po_number,
                item_code,
                quantity,
            } => info!(po_number, %item_code, quantity, "Order event applied"),
            SimEvent::Arrival {
                po_number,
                item_code,
                arrived_quantity,
            } => info!(po_number, %item_code, arrived_quantity, "Arrival event applied"),
            SimEvent::Skipped => debug!("Event tick skipped, no eligible records"),
        }

        if !matches!(event, SimEvent::Skipped) {
            cue::beep();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gudang_store::MemoryAdapter;

    use super::*;
    use crate::draws::ScriptedDraws;

    fn shared_store() -> Arc<RwLock<Store>> {
        Arc::new(RwLock::new(Store::open(Box::new(MemoryAdapter::new()))))
    }

    #[tokio::test(start_paused = true)]
    async fn events_fire_on_the_interval() {
        let store = shared_store();
        let control = Arc::new(SimControl::new(1_000));
        // One arrival event, then the script is exhausted.
        let draws = Box::new(ScriptedDraws::new([0.9]));

        let handle = tokio::spawn(run_simulator(
            Arc::clone(&store),
            Arc::clone(&control),
            draws,
        ));

        tokio::time::sleep(tokio::time::Duration::from_millis(1_100)).await;
        assert_eq!(store.read().await.arrivals().len(), 2);

        control.request_stop();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn paused_simulator_mutates_nothing() {
        let store = shared_store();
        let control = Arc::new(SimControl::new(1_000));
        control.pause();
        let draws = Box::new(ScriptedDraws::new([0.9, 0.9, 0.9]));

        let handle = tokio::spawn(run_simulator(
            Arc::clone(&store),
            Arc::clone(&control),
            draws,
        ));

        tokio::time::advance(tokio::time::Duration::from_secs(30)).await;
        {
            let guard = store.read().await;
            assert_eq!(guard.arrivals().len(), 1);
            assert_eq!(guard.withdrawals().len(), 2);
            assert_eq!(guard.orders().len(), 2);
        }
        assert_eq!(control.seconds_until_next_event(), None);

        control.request_stop();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn stop_requested_mid_sleep_applies_no_event() {
        let store = shared_store();
        let control = Arc::new(SimControl::new(1_000));
        let draws = Box::new(ScriptedDraws::new([0.9]));

        let handle = tokio::spawn(run_simulator(
            Arc::clone(&store),
            Arc::clone(&control),
            draws,
        ));

        tokio::time::advance(tokio::time::Duration::from_millis(500)).await;
        control.request_stop();
        handle.await.unwrap();

        assert_eq!(store.read().await.arrivals().len(), 1);
    }
}
