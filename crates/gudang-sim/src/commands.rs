//! Manual operator commands against the store.
//!
//! These are the synchronous mutations issued from the dashboard rather
//! than by the event timer: accepting an open order as delivered in
//! full, and bulk-clearing notifications.

use tracing::{debug, info};

use gudang_store::Store;
use gudang_types::{Arrival, ArrivalStatus, Notification, NotificationKind, OrderId};

/// Errors from manual commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The referenced order does not exist.
    #[error("order {0} not found")]
    OrderNotFound(OrderId),
}

/// Accept an order as delivered in full.
///
/// Creates an [`Arrival`] whose arrived quantity equals the ordered
/// quantity, increments the item's stock by that amount, and raises a
/// success notification.
///
/// # Errors
///
/// Returns [`CommandError::OrderNotFound`] when no order carries `order_id`.
pub fn accept_order(store: &mut Store, order_id: OrderId) -> Result<Arrival, CommandError> {
    let order = store
        .orders()
        .iter()
        .find(|o| o.order_id == order_id)
        .cloned()
        .ok_or(CommandError::OrderNotFound(order_id))?;

    let arrival = Arrival {
        arrival_id: store.next_arrival_id(),
        order_id: order.order_id,
        po_number: order.po_number.clone(),
        item_code: order.item_code.clone(),
        name: order.name.clone(),
        quantity: order.quantity,
        order_date: order.order_date,
        status: ArrivalStatus::Received,
        arrived_quantity: order.quantity,
    };

    if store
        .increment_stock(&order.item_code, order.quantity)
        .is_none()
    {
        debug!(item_code = %order.item_code, "Accepted order references unknown item, stock unchanged");
    }
    store.push_arrival(arrival.clone());
    store.push_notification(Notification::now(
        NotificationKind::Success,
        format!(
            "Order {} received: {} {} of {}",
            order.po_number, order.quantity, order.unit, order.name
        ),
    ));
    crate::cue::beep();

    info!(
        %order_id,
        po_number = order.po_number,
        quantity = order.quantity,
        "Order accepted"
    );
    Ok(arrival)
}

/// Bulk-clear all pending notifications. Returns how many were removed.
pub fn clear_notifications(store: &mut Store) -> usize {
    let removed = store.clear_notifications();
    info!(removed, "Notifications cleared");
    removed
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use gudang_store::MemoryAdapter;
    use gudang_types::ArrivalId;

    use super::*;

    fn seeded_store() -> Store {
        Store::open(Box::new(MemoryAdapter::new()))
    }

    #[test]
    fn accepting_an_order_books_the_full_quantity() {
        let mut store = seeded_store();
        // Seed order 1: 50 pcs of BRG001, which starts at 120.
        let arrival = accept_order(&mut store, OrderId::new(1)).unwrap();

        assert_eq!(arrival.arrival_id, ArrivalId::new(2));
        assert_eq!(arrival.status, ArrivalStatus::Received);
        assert_eq!(arrival.arrived_quantity, 50);

        let item = store
            .stock()
            .iter()
            .find(|i| i.code.as_str() == "BRG001")
            .unwrap();
        assert_eq!(item.quantity, 170);
        assert_eq!(
            store.notifications().last().unwrap().kind,
            NotificationKind::Success
        );
    }

    #[test]
    fn accepting_an_unknown_order_fails() {
        let mut store = seeded_store();
        let result = accept_order(&mut store, OrderId::new(99));
        assert!(matches!(result, Err(CommandError::OrderNotFound(id)) if id == OrderId::new(99)));
        assert_eq!(store.arrivals().len(), 1);
    }

    #[test]
    fn clearing_notifications_reports_the_count() {
        let mut store = seeded_store();
        assert_eq!(clear_notifications(&mut store), 1);
        assert!(store.notifications().is_empty());
    }
}
