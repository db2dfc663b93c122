//! Axum router construction for the dashboard API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::operator;
use crate::state::AppState;

/// Build the complete Axum router for the dashboard server.
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Collections
        .route("/api/collections/{key}", get(handlers::get_collection))
        // Derived views
        .route("/api/views/stock-chart", get(handlers::view_stock_chart))
        .route("/api/views/orders-monthly", get(handlers::view_orders_monthly))
        .route(
            "/api/views/withdrawals-by-area",
            get(handlers::view_withdrawals_by_area),
        )
        .route("/api/views/low-stock", get(handlers::view_low_stock))
        .route("/api/views/summary", get(handlers::view_summary))
        // Exports
        .route("/api/export/{key}/csv", get(handlers::export_csv))
        .route("/api/export/{key}/report", get(handlers::export_report))
        // Commands
        .route("/api/orders/{id}/accept", post(handlers::accept_order))
        .route("/api/notifications", delete(handlers::clear_notifications))
        // Simulator control
        .route("/api/sim/pause", post(operator::pause))
        .route("/api/sim/resume", post(operator::resume))
        .route("/api/sim/interval", post(operator::set_interval))
        .route("/api/sim/status", get(operator::status))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
