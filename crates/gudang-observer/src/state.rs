//! Shared application state for the dashboard API server.
//!
//! [`AppState`] bundles the collection store behind an async `RwLock`
//! with the simulator control handle. Handlers take the lock only for
//! the duration of a single read or mutation; the simulator loop shares
//! the same lock, so manual commands and simulated events serialize
//! against each other.

use std::sync::Arc;

use tokio::sync::RwLock;

use gudang_sim::SimControl;
use gudang_store::Store;
use gudang_views::DEFAULT_LOW_STOCK_THRESHOLD;

/// Shared state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    /// The live collection store, shared with the simulator loop.
    pub store: Arc<RwLock<Store>>,
    /// Simulator control handle (pause, resume, interval, countdown).
    pub control: Arc<SimControl>,
    /// Low-stock reporting threshold.
    pub low_stock_threshold: u32,
}

impl AppState {
    /// Bundle an existing store and control handle into handler state.
    pub const fn new(
        store: Arc<RwLock<Store>>,
        control: Arc<SimControl>,
        low_stock_threshold: u32,
    ) -> Self {
        Self {
            store,
            control,
            low_stock_threshold,
        }
    }

    /// State over a fresh in-memory store with default settings. Used by
    /// tests.
    pub fn in_memory() -> Self {
        let store = Store::open(Box::new(gudang_store::MemoryAdapter::new()));
        Self::new(
            Arc::new(RwLock::new(store)),
            Arc::new(SimControl::new(300_000)),
            DEFAULT_LOW_STOCK_THRESHOLD,
        )
    }
}
