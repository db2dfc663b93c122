//! Shared type definitions for the Gudang inventory service.
//!
//! This crate is the single source of truth for the record schemas held
//! by the persisted store and mutated by the event simulator. Every
//! collection has a strongly-typed record -- there is no runtime
//! field-name guessing anywhere downstream.
//!
//! # Modules
//!
//! - [`ids`] -- Typed numeric identifiers for the append-only collections
//! - [`enums`] -- Enumeration types (item status, arrival status, notification kind)
//! - [`key`] -- The fixed set of collection storage keys
//! - [`records`] -- The seven record types held by the store
//! - [`seed`] -- Compiled-in default collections used when storage is empty

pub mod enums;
pub mod ids;
pub mod key;
pub mod records;
pub mod seed;

// Re-export all public types at crate root for convenience.
pub use enums::{ArrivalStatus, ItemStatus, NotificationKind};
pub use ids::{ArrivalId, HistoryId, OrderId, StockRowId, WithdrawalId};
pub use key::CollectionKey;
pub use records::{
    Arrival, HistoryEntry, ItemCode, Notification, Order, StockItem, StockLedgerRow, Withdrawal,
};
