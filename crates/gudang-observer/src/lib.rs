//! Dashboard API server for the Gudang inventory service.
//!
//! Serves the seven collections, the derived views, and the export
//! blobs over HTTP, and exposes command endpoints for manual mutations
//! and simulator control. The server shares the live store with the
//! simulator loop through [`AppState`].
//!
//! # Modules
//!
//! - [`state`] -- Shared application state (store + simulator control)
//! - [`router`] -- Route table and middleware
//! - [`handlers`] -- Collection, view, export, and command handlers
//! - [`operator`] -- Simulator control handlers
//! - [`server`] -- TCP bind and serve lifecycle
//! - [`error`] -- Unified handler error type

pub mod error;
pub mod handlers;
pub mod operator;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ObserverError;
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
