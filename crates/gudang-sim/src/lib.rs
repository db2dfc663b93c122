//! Event simulator for the Gudang inventory service.
//!
//! The simulator is the only autonomous writer in the system: on a fixed
//! interval it applies exactly one randomized mutation (withdrawal,
//! order, or arrival) to the store, raises a notification, and sounds a
//! cue. All randomness flows through an injectable [`DrawSource`], so
//! every event path is deterministic under test.
//!
//! # Modules
//!
//! - [`draws`] -- Uniform random draws, live and scripted
//! - [`event`] -- The three weighted event types and their application
//! - [`control`] -- Shared pause/resume/stop/interval state and countdown
//! - [`runner`] -- The async loop that ties timer, control, and events together
//! - [`commands`] -- Manual operator commands (accept order, clear notifications)
//! - [`cue`] -- Best-effort audible cue
//! - [`config`] -- YAML service configuration

pub mod commands;
pub mod config;
pub mod control;
pub mod cue;
pub mod draws;
pub mod event;
pub mod runner;

// Re-export primary types for convenience.
pub use commands::{CommandError, accept_order, clear_notifications};
pub use config::{ConfigError, GudangConfig};
pub use control::{SimControl, SimStatus};
pub use draws::{DrawSource, RngDraws, ScriptedDraws};
pub use event::{SimEvent, apply_random_event};
pub use runner::run_simulator;
