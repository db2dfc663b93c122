//! The seven record types held by the persisted store.
//!
//! Field layouts mirror the persisted JSON payloads one to one. Records
//! are plain data: all invariants (quantity floors, identifier
//! assignment, mirroring withdrawals into history) are enforced by the
//! store and simulator, not here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::{ArrivalStatus, ItemStatus, NotificationKind};
use crate::ids::{ArrivalId, HistoryId, OrderId, StockRowId, WithdrawalId};

// ---------------------------------------------------------------------------
// ItemCode
// ---------------------------------------------------------------------------

/// Free-form item code referencing a stock item (e.g. `BRG003`).
///
/// Codes are not foreign keys: withdrawals and history entries carry the
/// code of the item they touched, but nothing prevents a dangling code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCode(pub String);

impl ItemCode {
    /// Wrap a raw code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Return the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemCode {
    fn from(code: &str) -> Self {
        Self(code.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Stock
// ---------------------------------------------------------------------------

/// A consumable stock item and its current on-hand quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    /// Item code (primary lookup key within the stock collection).
    pub code: ItemCode,
    /// Human-readable item name.
    pub name: String,
    /// Unit of measure (pcs, roll, set, kg, ...).
    pub unit: String,
    /// Lifecycle status.
    pub status: ItemStatus,
    /// On-hand quantity. Never negative: all decrements floor at zero.
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// A purchase order for a stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Sequence identifier within the orders collection.
    pub order_id: OrderId,
    /// Purchase-order number (e.g. `PO-1001`).
    pub po_number: String,
    /// Code of the ordered item.
    pub item_code: ItemCode,
    /// Denormalized item name at order time.
    pub name: String,
    /// Ordered quantity.
    pub quantity: u32,
    /// Unit of measure.
    pub unit: String,
    /// Calendar date the order was placed.
    pub order_date: NaiveDate,
}

/// A confirmed delivery against an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arrival {
    /// Sequence identifier within the arrivals collection.
    pub arrival_id: ArrivalId,
    /// The order this arrival settles. The simulator sometimes fabricates
    /// this link when no orders exist (falling back to the first stock item).
    pub order_id: OrderId,
    /// Purchase-order number carried over from the order.
    pub po_number: String,
    /// Code of the delivered item.
    pub item_code: ItemCode,
    /// Denormalized item name.
    pub name: String,
    /// Originally ordered quantity.
    pub quantity: u32,
    /// Calendar date of the underlying order.
    pub order_date: NaiveDate,
    /// Delivery status.
    pub status: ArrivalStatus,
    /// Quantity actually delivered and booked into stock.
    pub arrived_quantity: u32,
}

// ---------------------------------------------------------------------------
// Stock ledger
// ---------------------------------------------------------------------------

/// A static stock ledger snapshot row.
///
/// Seeded once and never mutated by any operation. Served and exported
/// like every other collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLedgerRow {
    /// Sequence identifier within the ledger collection.
    pub stock_id: StockRowId,
    /// The order the snapshot was taken against.
    pub order_id: OrderId,
    /// Item code.
    pub item_code: ItemCode,
    /// Denormalized item name.
    pub name: String,
    /// On-hand quantity at snapshot time.
    pub quantity: u32,
    /// Unit of measure.
    pub unit: String,
    /// Free-form availability status string.
    pub status: String,
    /// Quantity on order at snapshot time.
    pub ordered_qty: u32,
    /// Quantity still outstanding at snapshot time.
    pub outstanding_qty: u32,
}

// ---------------------------------------------------------------------------
// Withdrawals and history
// ---------------------------------------------------------------------------

/// A removal of stock for consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    /// Sequence identifier within the withdrawals collection.
    pub withdrawal_id: WithdrawalId,
    /// Ledger row the withdrawal was charged against.
    pub stock_id: StockRowId,
    /// Code of the withdrawn item.
    pub item_code: ItemCode,
    /// Denormalized item name.
    pub name: String,
    /// Withdrawn quantity.
    pub quantity: u32,
    /// Unit of measure.
    pub unit: String,
    /// Destination area (e.g. `Production`).
    pub area: String,
    /// Destination sub-area (e.g. `Line 1`).
    pub sub_area: String,
    /// Calendar date of the withdrawal.
    pub date: NaiveDate,
}

/// Append-only audit mirror of a withdrawal.
///
/// Every withdrawal produces exactly one history entry with the same
/// item code, quantity, and date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Sequence identifier within the history collection.
    pub history_id: HistoryId,
    /// The withdrawal this entry mirrors.
    pub withdrawal_id: WithdrawalId,
    /// Calendar date of the withdrawal.
    pub date: NaiveDate,
    /// Code of the withdrawn item.
    pub item_code: ItemCode,
    /// Denormalized item name.
    pub name: String,
    /// Withdrawn quantity.
    pub quantity: u32,
    /// Unit of measure.
    pub unit: String,
    /// Destination area.
    pub area: String,
    /// Destination sub-area.
    pub sub_area: String,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// An ephemeral notification shown until bulk-cleared.
///
/// Notifications are the only collection that is ever deleted from, so
/// they use time-ordered UUIDs instead of max-plus-one sequence numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// Severity class.
    pub kind: NotificationKind,
    /// Display text.
    pub text: String,
    /// When the notification was raised.
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Build a notification timestamped now with a fresh v7 id.
    pub fn now(kind: NotificationKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            kind,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_code_is_transparent_in_json() {
        let code = ItemCode::from("BRG001");
        assert_eq!(
            serde_json::to_string(&code).ok().as_deref(),
            Some("\"BRG001\"")
        );
    }

    #[test]
    fn stock_item_roundtrip() {
        let item = StockItem {
            code: ItemCode::from("BRG009"),
            name: String::from("Bearing"),
            unit: String::from("pcs"),
            status: ItemStatus::Active,
            quantity: 12,
        };
        let json = serde_json::to_string(&item).ok();
        assert!(json.is_some());
        let restored: Result<StockItem, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(item));
    }

    #[test]
    fn notification_now_uses_fresh_ids() {
        let a = Notification::now(NotificationKind::Info, "a");
        let b = Notification::now(NotificationKind::Info, "b");
        assert_ne!(a.id, b.id);
    }
}
