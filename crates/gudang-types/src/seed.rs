//! Compiled-in default collections.
//!
//! The store falls back to these records whenever a collection is
//! missing from storage or its persisted payload fails to parse. The
//! values mirror the sample warehouse data set the service ships with.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::enums::{ArrivalStatus, ItemStatus, NotificationKind};
use crate::ids::{ArrivalId, HistoryId, OrderId, StockRowId, WithdrawalId};
use crate::records::{
    Arrival, HistoryEntry, ItemCode, Notification, Order, StockItem, StockLedgerRow, Withdrawal,
};

/// Build a calendar date from literal components.
///
/// Falls back to the Unix epoch date on an invalid literal, which cannot
/// happen for the constants below.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Default stock items.
pub fn stock() -> Vec<StockItem> {
    let item = |code: &str, name: &str, unit: &str, quantity: u32| StockItem {
        code: ItemCode::from(code),
        name: name.to_owned(),
        unit: unit.to_owned(),
        status: ItemStatus::Active,
        quantity,
    };
    vec![
        item("BRG001", "Oil Filter", "pcs", 120),
        item("BRG002", "Wipe Cloth", "roll", 75),
        item("BRG003", "Seal Kit", "set", 20),
        item("BRG004", "V-Belt", "pcs", 200),
        item("BRG005", "Grease", "kg", 35),
    ]
}

/// Default purchase orders.
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            order_id: OrderId::new(1),
            po_number: String::from("PO-1001"),
            item_code: ItemCode::from("BRG001"),
            name: String::from("Oil Filter"),
            quantity: 50,
            unit: String::from("pcs"),
            order_date: date(2025, 9, 10),
        },
        Order {
            order_id: OrderId::new(2),
            po_number: String::from("PO-1002"),
            item_code: ItemCode::from("BRG002"),
            name: String::from("Wipe Cloth"),
            quantity: 30,
            unit: String::from("roll"),
            order_date: date(2025, 9, 15),
        },
    ]
}

/// Default arrival records.
pub fn arrivals() -> Vec<Arrival> {
    vec![Arrival {
        arrival_id: ArrivalId::new(1),
        order_id: OrderId::new(1),
        po_number: String::from("PO-1001"),
        item_code: ItemCode::from("BRG001"),
        name: String::from("Oil Filter"),
        quantity: 50,
        order_date: date(2025, 9, 10),
        status: ArrivalStatus::Confirmed,
        arrived_quantity: 50,
    }]
}

/// Default stock ledger rows.
pub fn stock_ledger() -> Vec<StockLedgerRow> {
    vec![StockLedgerRow {
        stock_id: StockRowId::new(1),
        order_id: OrderId::new(1),
        item_code: ItemCode::from("BRG001"),
        name: String::from("Oil Filter"),
        quantity: 120,
        unit: String::from("pcs"),
        status: String::from("available"),
        ordered_qty: 50,
        outstanding_qty: 0,
    }]
}

/// Default withdrawal records.
pub fn withdrawals() -> Vec<Withdrawal> {
    vec![
        Withdrawal {
            withdrawal_id: WithdrawalId::new(1),
            stock_id: StockRowId::new(1),
            item_code: ItemCode::from("BRG003"),
            name: String::from("Seal Kit"),
            quantity: 5,
            unit: String::from("set"),
            area: String::from("Warehouse A"),
            sub_area: String::from("Rack 1"),
            date: date(2025, 10, 12),
        },
        Withdrawal {
            withdrawal_id: WithdrawalId::new(2),
            stock_id: StockRowId::new(1),
            item_code: ItemCode::from("BRG001"),
            name: String::from("Oil Filter"),
            quantity: 12,
            unit: String::from("pcs"),
            area: String::from("Warehouse B"),
            sub_area: String::from("Rack 4"),
            date: date(2025, 10, 13),
        },
    ]
}

/// Default history entries (mirror of the first seed withdrawal).
pub fn history() -> Vec<HistoryEntry> {
    vec![HistoryEntry {
        history_id: HistoryId::new(1),
        withdrawal_id: WithdrawalId::new(1),
        date: date(2025, 10, 12),
        item_code: ItemCode::from("BRG003"),
        name: String::from("Seal Kit"),
        quantity: 5,
        unit: String::from("set"),
        area: String::from("Warehouse A"),
        sub_area: String::from("Rack 1"),
    }]
}

/// Default notifications: a single greeting raised at startup.
pub fn notifications() -> Vec<Notification> {
    vec![Notification {
        id: Uuid::now_v7(),
        kind: NotificationKind::Info,
        text: String::from("Preview ready - sample data loaded"),
        timestamp: chrono::Utc::now(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_seed_has_five_items() {
        let items = stock();
        assert_eq!(items.len(), 5);
        assert!(items.iter().all(|i| i.status == ItemStatus::Active));
    }

    #[test]
    fn seal_kit_seeds_at_twenty() {
        let items = stock();
        let seal_kit = items.iter().find(|i| i.code.as_str() == "BRG003");
        assert_eq!(seal_kit.map(|i| i.quantity), Some(20));
    }

    #[test]
    fn history_mirrors_first_withdrawal() {
        let w = withdrawals();
        let h = history();
        let first = w.first();
        let mirror = h.first();
        assert_eq!(
            first.map(|w| (&w.item_code, w.quantity, w.date)),
            mirror.map(|h| (&h.item_code, h.quantity, h.date)),
        );
    }

    #[test]
    fn seed_ids_start_at_one() {
        assert_eq!(orders().first().map(|o| o.order_id), Some(OrderId::new(1)));
        assert_eq!(
            arrivals().first().map(|a| a.arrival_id),
            Some(ArrivalId::new(1))
        );
    }
}
