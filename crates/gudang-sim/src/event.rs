//! Randomized inventory events.
//!
//! Each simulator tick applies exactly one event to the store, chosen
//! by a three-way weighted draw:
//!
//! - `[0, 0.4)` -- withdrawal: a random item loses a small quantity
//! - `[0.4, 0.7)` -- order: a new purchase order for a random item
//! - `[0.7, 1.0)` -- arrival: a delivery settles the first open order
//!
//! Event application is a pure function of the store contents and the
//! draw sequence, so a scripted [`DrawSource`] replays any scenario
//! deterministically.

use chrono::NaiveDate;

use gudang_store::Store;
use gudang_types::{
    Arrival, ArrivalStatus, HistoryEntry, ItemCode, Notification, NotificationKind, Order, OrderId,
    StockRowId, Withdrawal,
};

use crate::draws::DrawSource;

/// Draw values below this select a withdrawal event.
const WITHDRAWAL_BAND_END: f64 = 0.4;
/// Draw values below this (and above the withdrawal band) select an order.
const ORDER_BAND_END: f64 = 0.7;

/// Largest quantity a single withdrawal event removes.
const MAX_WITHDRAWAL_QUANTITY: u32 = 5;
/// Largest quantity a single order event requests.
const MAX_ORDER_QUANTITY: u32 = 50;
/// Fixed quantity booked in by a simulated arrival.
const ARRIVAL_QUANTITY: u32 = 10;

/// Outcome of one simulator tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    /// Stock was withdrawn from an item.
    Withdrawal {
        /// Code of the item withdrawn from.
        item_code: ItemCode,
        /// Quantity removed.
        quantity: u32,
        /// On-hand quantity after the withdrawal.
        remaining: u32,
    },
    /// A new purchase order was placed.
    Order {
        /// Purchase-order number assigned to the new order.
        po_number: String,
        /// Code of the ordered item.
        item_code: ItemCode,
        /// Ordered quantity.
        quantity: u32,
    },
    /// A delivery arrived and was booked into stock.
    Arrival {
        /// Purchase-order number the delivery settles.
        po_number: String,
        /// Code of the delivered item.
        item_code: ItemCode,
        /// Quantity booked into stock.
        arrived_quantity: u32,
    },
    /// No eligible records existed; the tick was a no-op.
    Skipped,
}

/// Map a uniform draw in `[0, 1)` onto an index in `0..len`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::arithmetic_side_effects
)]
fn pick_index(draw: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let scaled = (draw.clamp(0.0, 1.0) * len as f64) as usize;
    scaled.min(len.saturating_sub(1))
}

/// Map a uniform draw in `[0, 1)` onto a quantity in `1..=max`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::arithmetic_side_effects
)]
fn draw_quantity(draw: f64, max: u32) -> u32 {
    if max == 0 {
        return 0;
    }
    let scaled = (draw.clamp(0.0, 1.0) * f64::from(max)) as u32;
    scaled.saturating_add(1).min(max)
}

/// Select and apply one random event to the store.
///
/// Consumes one draw to pick the event type, then whatever draws that
/// event needs for item and quantity selection. `today` is the calendar
/// date stamped onto any created record.
pub fn apply_random_event(
    store: &mut Store,
    draws: &mut dyn DrawSource,
    today: NaiveDate,
) -> SimEvent {
    let selector = draws.draw();
    if selector < WITHDRAWAL_BAND_END {
        withdrawal_event(store, draws, today)
    } else if selector < ORDER_BAND_END {
        order_event(store, draws, today)
    } else {
        arrival_event(store, today)
    }
}

/// Withdraw a random quantity from a random item with stock to spare.
///
/// Skips the tick when no item has a quantity above one.
fn withdrawal_event(store: &mut Store, draws: &mut dyn DrawSource, today: NaiveDate) -> SimEvent {
    let eligible: Vec<_> = store
        .stock()
        .iter()
        .filter(|item| item.quantity > 1)
        .cloned()
        .collect();
    let index = pick_index(draws.draw(), eligible.len());
    let Some(item) = eligible.get(index) else {
        return SimEvent::Skipped;
    };

    let quantity = draw_quantity(draws.draw(), MAX_WITHDRAWAL_QUANTITY).min(item.quantity);
    let stock_id = store
        .stock_ledger()
        .first()
        .map_or(StockRowId::FIRST, |row| row.stock_id);

    let withdrawal = Withdrawal {
        withdrawal_id: store.next_withdrawal_id(),
        stock_id,
        item_code: item.code.clone(),
        name: item.name.clone(),
        quantity,
        unit: item.unit.clone(),
        area: String::from("Production"),
        sub_area: String::from("Line 1"),
        date: today,
    };
    let entry = HistoryEntry {
        history_id: store.next_history_id(),
        withdrawal_id: withdrawal.withdrawal_id,
        date: withdrawal.date,
        item_code: withdrawal.item_code.clone(),
        name: withdrawal.name.clone(),
        quantity: withdrawal.quantity,
        unit: withdrawal.unit.clone(),
        area: withdrawal.area.clone(),
        sub_area: withdrawal.sub_area.clone(),
    };

    let remaining = store.decrement_stock(&item.code, quantity).unwrap_or(0);
    store.push_withdrawal(withdrawal);
    store.push_history(entry);
    store.push_notification(Notification::now(
        NotificationKind::Warning,
        format!("Withdrew {quantity} {} of {}", item.unit, item.name),
    ));

    SimEvent::Withdrawal {
        item_code: item.code.clone(),
        quantity,
        remaining,
    }
}

/// Place a new order for a random item. Stock is unaffected.
fn order_event(store: &mut Store, draws: &mut dyn DrawSource, today: NaiveDate) -> SimEvent {
    let index = pick_index(draws.draw(), store.stock().len());
    let Some(item) = store.stock().get(index).cloned() else {
        return SimEvent::Skipped;
    };

    let quantity = draw_quantity(draws.draw(), MAX_ORDER_QUANTITY);
    let order_id = store.next_order_id();
    let po_number = format!("PO-{}", order_id.value().saturating_add(1000));

    store.prepend_order(Order {
        order_id,
        po_number: po_number.clone(),
        item_code: item.code.clone(),
        name: item.name.clone(),
        quantity,
        unit: item.unit.clone(),
        order_date: today,
    });
    store.push_notification(Notification::now(
        NotificationKind::Info,
        format!("New order {po_number}: {quantity} {} of {}", item.unit, item.name),
    ));

    SimEvent::Order {
        po_number,
        item_code: item.code,
        quantity,
    }
}

/// Book a fixed-quantity delivery against the first open order.
///
/// When no orders exist the first stock item is used as the basis and
/// the order link is fabricated. Skips only when the store holds neither
/// orders nor stock items.
fn arrival_event(store: &mut Store, today: NaiveDate) -> SimEvent {
    let basis = store.orders().first().cloned().map_or_else(
        || {
            store.stock().first().cloned().map(|item| Order {
                order_id: OrderId::FIRST,
                po_number: String::from("PO-0000"),
                item_code: item.code,
                name: item.name,
                quantity: ARRIVAL_QUANTITY,
                unit: item.unit,
                order_date: today,
            })
        },
        Some,
    );
    let Some(basis) = basis else {
        return SimEvent::Skipped;
    };

    let arrival = Arrival {
        arrival_id: store.next_arrival_id(),
        order_id: basis.order_id,
        po_number: basis.po_number.clone(),
        item_code: basis.item_code.clone(),
        name: basis.name.clone(),
        quantity: basis.quantity,
        order_date: basis.order_date,
        status: ArrivalStatus::Received,
        arrived_quantity: ARRIVAL_QUANTITY,
    };

    if store
        .increment_stock(&basis.item_code, ARRIVAL_QUANTITY)
        .is_none()
    {
        tracing::debug!(item_code = %basis.item_code, "Arrival references unknown item, stock unchanged");
    }
    store.push_arrival(arrival);
    store.push_notification(Notification::now(
        NotificationKind::Success,
        format!(
            "Arrival for {}: {ARRIVAL_QUANTITY} {} of {}",
            basis.po_number, basis.unit, basis.name
        ),
    ));

    SimEvent::Arrival {
        po_number: basis.po_number,
        item_code: basis.item_code,
        arrived_quantity: ARRIVAL_QUANTITY,
    }
}
