//! Persistence layer for the Gudang inventory service.
//!
//! The store keeps all seven collections in memory and writes each one
//! back through a pluggable [`StorageAdapter`] after every mutation.
//! Reads never touch storage after startup, so the running process is
//! always the source of truth and storage is only a best-effort mirror.
//!
//! # Modules
//!
//! - [`adapter`] -- Raw payload storage backends (JSON files, in-memory)
//! - [`store`] -- The typed collection store, seeding, and identifier assignment
//! - [`error`] -- Shared error types

pub mod adapter;
pub mod error;
pub mod store;

// Re-export primary types for convenience.
pub use adapter::{JsonFileAdapter, MemoryAdapter, StorageAdapter};
pub use error::StoreError;
pub use store::Store;
