//! REST API endpoint handlers for the dashboard server.
//!
//! All handlers read from the shared [`Store`] via [`AppState`]. The
//! write lock is taken only by the two mutating commands (accept order,
//! clear notifications).
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/collections/{key}` | One collection as JSON |
//! | `GET` | `/api/views/stock-chart` | Per-item quantities |
//! | `GET` | `/api/views/orders-monthly` | Order quantity per month |
//! | `GET` | `/api/views/withdrawals-by-area` | Withdrawal quantity per area |
//! | `GET` | `/api/views/low-stock` | Items below the threshold |
//! | `GET` | `/api/views/summary` | Dashboard headline counts |
//! | `GET` | `/api/export/{key}/csv` | CSV download (204 when empty) |
//! | `GET` | `/api/export/{key}/report` | Printable HTML report |
//! | `POST` | `/api/orders/{id}/accept` | Accept an order as delivered |
//! | `DELETE` | `/api/notifications` | Bulk-clear notifications |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde_json::Value;

use gudang_export::{ExportError, to_csv, to_report_html};
use gudang_sim::CommandError;
use gudang_store::Store;
use gudang_types::{CollectionKey, OrderId};

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Collection dispatch
// ---------------------------------------------------------------------------

fn parse_key(raw: &str) -> Result<CollectionKey, ObserverError> {
    CollectionKey::parse(raw)
        .ok_or_else(|| ObserverError::NotFound(format!("unknown collection: {raw}")))
}

fn collection_json(store: &Store, key: CollectionKey) -> Result<Value, serde_json::Error> {
    match key {
        CollectionKey::Stock => serde_json::to_value(store.stock()),
        CollectionKey::Orders => serde_json::to_value(store.orders()),
        CollectionKey::Arrivals => serde_json::to_value(store.arrivals()),
        CollectionKey::StockLedger => serde_json::to_value(store.stock_ledger()),
        CollectionKey::Withdrawals => serde_json::to_value(store.withdrawals()),
        CollectionKey::History => serde_json::to_value(store.history()),
        CollectionKey::Notifications => serde_json::to_value(store.notifications()),
    }
}

fn collection_csv(store: &Store, key: CollectionKey) -> Result<Option<String>, ExportError> {
    match key {
        CollectionKey::Stock => to_csv(store.stock()),
        CollectionKey::Orders => to_csv(store.orders()),
        CollectionKey::Arrivals => to_csv(store.arrivals()),
        CollectionKey::StockLedger => to_csv(store.stock_ledger()),
        CollectionKey::Withdrawals => to_csv(store.withdrawals()),
        CollectionKey::History => to_csv(store.history()),
        CollectionKey::Notifications => to_csv(store.notifications()),
    }
}

fn collection_report(store: &Store, key: CollectionKey) -> Result<String, ExportError> {
    let title = format!("Gudang {key}");
    match key {
        CollectionKey::Stock => to_report_html(&title, store.stock()),
        CollectionKey::Orders => to_report_html(&title, store.orders()),
        CollectionKey::Arrivals => to_report_html(&title, store.arrivals()),
        CollectionKey::StockLedger => to_report_html(&title, store.stock_ledger()),
        CollectionKey::Withdrawals => to_report_html(&title, store.withdrawals()),
        CollectionKey::History => to_report_html(&title, store.history()),
        CollectionKey::Notifications => to_report_html(&title, store.notifications()),
    }
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let stock_count = store.stock().len();
    let order_count = store.orders().len();
    let notification_count = store.notifications().len();
    let low_stock_count =
        gudang_views::low_stock(store.stock(), state.low_stock_threshold).len();
    drop(store);

    let sim_state = if state.control.is_paused() {
        "PAUSED"
    } else {
        "RUNNING"
    };
    let countdown = state
        .control
        .seconds_until_next_event()
        .map_or_else(|| String::from("-"), |s| format!("{s}s"));

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Gudang Dashboard</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Gudang Dashboard</h1>
    <p>Simulator: <span class="status">{sim_state}</span> -- next event in {countdown}</p>

    <div>
        <div class="metric">
            <div class="label">Stock items</div>
            <div class="value">{stock_count}</div>
        </div>
        <div class="metric">
            <div class="label">Orders</div>
            <div class="value">{order_count}</div>
        </div>
        <div class="metric">
            <div class="label">Low stock</div>
            <div class="value">{low_stock_count}</div>
        </div>
        <div class="metric">
            <div class="label">Notifications</div>
            <div class="value">{notification_count}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/api/collections/stock">/api/collections/{{key}}</a> -- stock, orders, arrivals, stock-ledger, withdrawals, history, notifications</li>
        <li><a href="/api/views/stock-chart">/api/views/stock-chart</a> -- per-item quantities</li>
        <li><a href="/api/views/orders-monthly">/api/views/orders-monthly</a> -- order quantity per month</li>
        <li><a href="/api/views/withdrawals-by-area">/api/views/withdrawals-by-area</a> -- withdrawal quantity per area</li>
        <li><a href="/api/views/low-stock">/api/views/low-stock</a> -- items below the threshold</li>
        <li><a href="/api/views/summary">/api/views/summary</a> -- dashboard headline counts</li>
        <li><a href="/api/export/stock/csv">/api/export/{{key}}/csv</a> -- CSV download</li>
        <li><a href="/api/export/stock/report">/api/export/{{key}}/report</a> -- printable report</li>
        <li><a href="/api/sim/status">/api/sim/status</a> -- simulator status</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/collections/{key}
// ---------------------------------------------------------------------------

/// Return one collection as a JSON array.
pub async fn get_collection(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ObserverError> {
    let key = parse_key(&key)?;
    let store = state.store.read().await;
    Ok(Json(collection_json(&store, key)?))
}

// ---------------------------------------------------------------------------
// GET /api/views/*
// ---------------------------------------------------------------------------

/// Per-item on-hand quantities for charting.
pub async fn view_stock_chart(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(gudang_views::stock_chart(store.stock()))
}

/// Order quantity summed per calendar month.
pub async fn view_orders_monthly(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(gudang_views::orders_by_month(store.orders()))
}

/// Withdrawal quantity summed per destination area.
pub async fn view_withdrawals_by_area(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(gudang_views::withdrawals_by_area(store.withdrawals()))
}

/// Items below the low-stock threshold.
pub async fn view_low_stock(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(gudang_views::low_stock(
        store.stock(),
        state.low_stock_threshold,
    ))
}

/// Dashboard headline counts.
pub async fn view_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    Json(gudang_views::summary(
        store.stock(),
        store.orders(),
        store.notifications(),
        state.low_stock_threshold,
    ))
}

// ---------------------------------------------------------------------------
// GET /api/export/{key}/csv and /api/export/{key}/report
// ---------------------------------------------------------------------------

/// Download one collection as a CSV attachment.
///
/// An empty collection yields `204 No Content` and no file.
pub async fn export_csv(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Response, ObserverError> {
    let key = parse_key(&key)?;
    let store = state.store.read().await;
    let Some(blob) = collection_csv(&store, key)? else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    let disposition = format!("attachment; filename=\"{key}.csv\"");
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, String::from("text/csv")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        blob,
    )
        .into_response())
}

/// Render one collection as a printable HTML report.
pub async fn export_report(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ObserverError> {
    let key = parse_key(&key)?;
    let store = state.store.read().await;
    Ok(Html(collection_report(&store, key)?))
}

// ---------------------------------------------------------------------------
// POST /api/orders/{id}/accept
// ---------------------------------------------------------------------------

/// Accept an order as delivered in full.
///
/// Books an arrival for the full ordered quantity, increments stock,
/// and returns the created arrival record.
pub async fn accept_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ObserverError> {
    let mut store = state.store.write().await;
    match gudang_sim::accept_order(&mut store, OrderId::new(id)) {
        Ok(arrival) => Ok(Json(serde_json::to_value(&arrival)?)),
        Err(CommandError::OrderNotFound(order_id)) => {
            Err(ObserverError::NotFound(format!("order {order_id} not found")))
        }
    }
}

// ---------------------------------------------------------------------------
// DELETE /api/notifications
// ---------------------------------------------------------------------------

/// Bulk-clear all pending notifications.
pub async fn clear_notifications(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut store = state.store.write().await;
    let removed = gudang_sim::clear_notifications(&mut store);
    Json(serde_json::json!({ "ok": true, "removed": removed }))
}
