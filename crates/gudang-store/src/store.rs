//! The in-memory collection store and its persistence rules.
//!
//! All seven collections are loaded once when the store opens. A
//! collection whose payload is missing or fails to parse falls back to
//! the compiled-in seed data. Every mutation updates memory first and
//! then writes the collection back through the adapter; a failed
//! write-back is logged and swallowed so the running state stays
//! authoritative.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use gudang_types::{
    Arrival, ArrivalId, CollectionKey, HistoryEntry, HistoryId, ItemCode, Notification, Order,
    OrderId, StockItem, StockLedgerRow, Withdrawal, WithdrawalId, seed,
};

use crate::adapter::StorageAdapter;

/// The seven persisted collections plus their storage adapter.
pub struct Store {
    adapter: Box<dyn StorageAdapter>,
    stock: Vec<StockItem>,
    orders: Vec<Order>,
    arrivals: Vec<Arrival>,
    stock_ledger: Vec<StockLedgerRow>,
    withdrawals: Vec<Withdrawal>,
    history: Vec<HistoryEntry>,
    notifications: Vec<Notification>,
}

impl core::fmt::Debug for Store {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Store")
            .field("stock", &self.stock.len())
            .field("orders", &self.orders.len())
            .field("arrivals", &self.arrivals.len())
            .field("stock_ledger", &self.stock_ledger.len())
            .field("withdrawals", &self.withdrawals.len())
            .field("history", &self.history.len())
            .field("notifications", &self.notifications.len())
            .finish()
    }
}

/// Load one collection, falling back to seed data when the payload is
/// missing, unreadable, or corrupt.
fn load_or_seed<T: DeserializeOwned>(
    adapter: &dyn StorageAdapter,
    key: CollectionKey,
    seed: fn() -> Vec<T>,
) -> Vec<T> {
    match adapter.load(key) {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(records) => records,
            Err(error) => {
                warn!(collection = %key, %error, "Corrupt payload, falling back to seed data");
                seed()
            }
        },
        Ok(None) => {
            debug!(collection = %key, "No persisted payload, using seed data");
            seed()
        }
        Err(error) => {
            warn!(collection = %key, %error, "Load failed, falling back to seed data");
            seed()
        }
    }
}

impl Store {
    /// Open the store, loading every collection through `adapter`.
    pub fn open(adapter: Box<dyn StorageAdapter>) -> Self {
        let stock = load_or_seed(adapter.as_ref(), CollectionKey::Stock, seed::stock);
        let orders = load_or_seed(adapter.as_ref(), CollectionKey::Orders, seed::orders);
        let arrivals = load_or_seed(adapter.as_ref(), CollectionKey::Arrivals, seed::arrivals);
        let stock_ledger = load_or_seed(
            adapter.as_ref(),
            CollectionKey::StockLedger,
            seed::stock_ledger,
        );
        let withdrawals = load_or_seed(
            adapter.as_ref(),
            CollectionKey::Withdrawals,
            seed::withdrawals,
        );
        let history = load_or_seed(adapter.as_ref(), CollectionKey::History, seed::history);
        let notifications = load_or_seed(
            adapter.as_ref(),
            CollectionKey::Notifications,
            seed::notifications,
        );

        Self {
            adapter,
            stock,
            orders,
            arrivals,
            stock_ledger,
            withdrawals,
            history,
            notifications,
        }
    }

    /// Serialize one collection and write it back through the adapter.
    ///
    /// Failures are logged and swallowed: the in-memory state stays
    /// authoritative and the next successful write-back heals the file.
    fn persist<T: Serialize>(&self, key: CollectionKey, records: &[T]) {
        match serde_json::to_string_pretty(records) {
            Ok(payload) => {
                if let Err(error) = self.adapter.save(key, &payload) {
                    warn!(collection = %key, %error, "Write-back failed, keeping in-memory state");
                }
            }
            Err(error) => {
                warn!(collection = %key, %error, "Serialization failed, keeping in-memory state");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Current stock items.
    pub fn stock(&self) -> &[StockItem] {
        &self.stock
    }

    /// Purchase orders.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Confirmed arrivals.
    pub fn arrivals(&self) -> &[Arrival] {
        &self.arrivals
    }

    /// Static stock ledger rows.
    pub fn stock_ledger(&self) -> &[StockLedgerRow] {
        &self.stock_ledger
    }

    /// Stock withdrawals.
    pub fn withdrawals(&self) -> &[Withdrawal] {
        &self.withdrawals
    }

    /// Withdrawal history entries.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Pending notifications.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    // -----------------------------------------------------------------------
    // Identifier assignment
    // -----------------------------------------------------------------------

    /// Next order identifier: one greater than the current maximum.
    pub fn next_order_id(&self) -> OrderId {
        self.orders
            .iter()
            .map(|o| o.order_id)
            .max()
            .map_or(OrderId::FIRST, OrderId::next)
    }

    /// Next arrival identifier: one greater than the current maximum.
    pub fn next_arrival_id(&self) -> ArrivalId {
        self.arrivals
            .iter()
            .map(|a| a.arrival_id)
            .max()
            .map_or(ArrivalId::FIRST, ArrivalId::next)
    }

    /// Next withdrawal identifier: one greater than the current maximum.
    pub fn next_withdrawal_id(&self) -> WithdrawalId {
        self.withdrawals
            .iter()
            .map(|w| w.withdrawal_id)
            .max()
            .map_or(WithdrawalId::FIRST, WithdrawalId::next)
    }

    /// Next history identifier: one greater than the current maximum.
    pub fn next_history_id(&self) -> HistoryId {
        self.history
            .iter()
            .map(|h| h.history_id)
            .max()
            .map_or(HistoryId::FIRST, HistoryId::next)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Decrement a stock item's quantity, flooring at zero.
    ///
    /// Returns the new quantity, or `None` when no item carries `code`.
    pub fn decrement_stock(&mut self, code: &ItemCode, quantity: u32) -> Option<u32> {
        let item = self.stock.iter_mut().find(|i| &i.code == code)?;
        item.quantity = item.quantity.saturating_sub(quantity);
        let updated = item.quantity;
        self.persist(CollectionKey::Stock, &self.stock);
        Some(updated)
    }

    /// Increment a stock item's quantity.
    ///
    /// Returns the new quantity, or `None` when no item carries `code`.
    pub fn increment_stock(&mut self, code: &ItemCode, quantity: u32) -> Option<u32> {
        let item = self.stock.iter_mut().find(|i| &i.code == code)?;
        item.quantity = item.quantity.saturating_add(quantity);
        let updated = item.quantity;
        self.persist(CollectionKey::Stock, &self.stock);
        Some(updated)
    }

    /// Insert a purchase order at the front of the collection.
    ///
    /// Orders are kept newest first, so "the first order" is always the
    /// most recently placed one.
    pub fn prepend_order(&mut self, order: Order) {
        self.orders.insert(0, order);
        self.persist(CollectionKey::Orders, &self.orders);
    }

    /// Append an arrival record.
    pub fn push_arrival(&mut self, arrival: Arrival) {
        self.arrivals.push(arrival);
        self.persist(CollectionKey::Arrivals, &self.arrivals);
    }

    /// Append a withdrawal record.
    pub fn push_withdrawal(&mut self, withdrawal: Withdrawal) {
        self.withdrawals.push(withdrawal);
        self.persist(CollectionKey::Withdrawals, &self.withdrawals);
    }

    /// Append a history entry.
    pub fn push_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
        self.persist(CollectionKey::History, &self.history);
    }

    /// Append a notification.
    pub fn push_notification(&mut self, notification: Notification) {
        self.notifications.push(notification);
        self.persist(CollectionKey::Notifications, &self.notifications);
    }

    /// Delete every pending notification.
    ///
    /// Returns the number of notifications removed.
    pub fn clear_notifications(&mut self) -> usize {
        let removed = self.notifications.len();
        self.notifications.clear();
        self.persist(CollectionKey::Notifications, &self.notifications);
        removed
    }
}
