//! Derived views over the Gudang collections.
//!
//! Every view here is a pure aggregation: given slices of records, it
//! returns a freshly computed summary and never touches the store. Views
//! are recomputed per request rather than cached, which is cheap at the
//! collection sizes this service handles.
//!
//! # Views
//!
//! - [`stock_chart`] -- per-item on-hand quantities for charting
//! - [`orders_by_month`] -- order quantity summed per calendar month
//! - [`withdrawals_by_area`] -- withdrawal quantity summed per destination area
//! - [`low_stock`] -- items below a fixed quantity threshold
//! - [`summary`] -- headline counts for the dashboard banner

use std::collections::BTreeMap;

use serde::Serialize;

use gudang_types::{Notification, Order, StockItem, Withdrawal};

/// Items with a quantity below this are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 50;

// ---------------------------------------------------------------------------
// Stock chart
// ---------------------------------------------------------------------------

/// One bar of the per-item stock chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockChartPoint {
    /// Item code.
    pub code: String,
    /// Item name used as the bar label.
    pub name: String,
    /// Current on-hand quantity.
    pub quantity: u32,
}

/// Per-item on-hand quantities, in collection order.
pub fn stock_chart(stock: &[StockItem]) -> Vec<StockChartPoint> {
    stock
        .iter()
        .map(|item| StockChartPoint {
            code: item.code.as_str().to_owned(),
            name: item.name.clone(),
            quantity: item.quantity,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Monthly and per-area totals
// ---------------------------------------------------------------------------

/// Order quantity summed per calendar month of the order date.
///
/// Keys are `YYYY-MM` strings, so the map's natural ordering is
/// chronological.
pub fn orders_by_month(orders: &[Order]) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for order in orders {
        let month = order.order_date.format("%Y-%m").to_string();
        let total: &mut u64 = totals.entry(month).or_default();
        *total = total.saturating_add(u64::from(order.quantity));
    }
    totals
}

/// Withdrawal quantity summed per destination area.
pub fn withdrawals_by_area(withdrawals: &[Withdrawal]) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for withdrawal in withdrawals {
        let total: &mut u64 = totals.entry(withdrawal.area.clone()).or_default();
        *total = total.saturating_add(u64::from(withdrawal.quantity));
    }
    totals
}

// ---------------------------------------------------------------------------
// Low stock
// ---------------------------------------------------------------------------

/// Items whose quantity is strictly below `threshold`, in collection order.
pub fn low_stock(stock: &[StockItem], threshold: u32) -> Vec<StockItem> {
    stock
        .iter()
        .filter(|item| item.quantity < threshold)
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// Dashboard summary
// ---------------------------------------------------------------------------

/// Headline counts shown on the dashboard banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of distinct stock items.
    pub stock_items: usize,
    /// Sum of on-hand quantities across all items.
    pub total_on_hand: u64,
    /// Number of purchase orders on file.
    pub orders: usize,
    /// Number of items below the low-stock threshold.
    pub low_stock_items: usize,
    /// Number of pending notifications.
    pub pending_notifications: usize,
}

/// Compute the dashboard summary from the live collections.
pub fn summary(
    stock: &[StockItem],
    orders: &[Order],
    notifications: &[Notification],
    low_stock_threshold: u32,
) -> Summary {
    let total_on_hand = stock
        .iter()
        .fold(0_u64, |acc, item| acc.saturating_add(u64::from(item.quantity)));
    Summary {
        stock_items: stock.len(),
        total_on_hand,
        orders: orders.len(),
        low_stock_items: low_stock(stock, low_stock_threshold).len(),
        pending_notifications: notifications.len(),
    }
}
