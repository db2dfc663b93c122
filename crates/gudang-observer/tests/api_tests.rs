//! Integration tests for the dashboard API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server. This validates handler logic and routing
//! without needing a live network connection.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use gudang_observer::router::build_router;
use gudang_observer::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

fn make_test_state() -> Arc<AppState> {
    Arc::new(AppState::in_memory())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn index_returns_html() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Gudang Dashboard"));
}

#[tokio::test]
async fn every_collection_is_served() {
    let state = make_test_state();

    for key in [
        "stock",
        "orders",
        "arrivals",
        "stock-ledger",
        "withdrawals",
        "history",
        "notifications",
    ] {
        let router = build_router(Arc::clone(&state));
        let response = router
            .oneshot(
                Request::get(format!("/api/collections/{key}").as_str())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "collection {key}");
        let json = body_to_json(response.into_body()).await;
        assert!(json.is_array(), "collection {key}");
    }
}

#[tokio::test]
async fn stock_collection_holds_the_seed_items() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/collections/stock")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json.as_array().unwrap().len(), 5);
    assert_eq!(json[0]["code"], "BRG001");
}

#[tokio::test]
async fn unknown_collection_is_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/collections/suppliers")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn low_stock_view_flags_items_under_threshold() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/views/low-stock")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    // Seed items below 50: Seal Kit (20) and Grease (35).
    let codes: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["BRG003", "BRG005"]);
}

#[tokio::test]
async fn summary_view_reports_headline_counts() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/views/summary")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["stock_items"], 5);
    assert_eq!(json["orders"], 2);
    assert_eq!(json["low_stock_items"], 2);
    assert_eq!(json["pending_notifications"], 1);
}

#[tokio::test]
async fn orders_monthly_view_groups_by_month() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/views/orders-monthly")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_to_json(response.into_body()).await;
    // Both seed orders fall in September 2025 (50 + 30).
    assert_eq!(json["2025-09"], 80);
}

#[tokio::test]
async fn csv_export_downloads_an_attachment() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/export/stock/csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers.get("content-type").unwrap(), "text/csv");
    assert!(
        headers
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("stock.csv")
    );
    let body = body_to_string(response.into_body()).await;
    assert!(body.starts_with("code,name,quantity,status,unit"));
    assert_eq!(body.lines().count(), 6);
}

#[tokio::test]
async fn empty_collection_csv_is_no_content() {
    let state = make_test_state();

    // Clear notifications, then export the now-empty collection.
    let response = build_router(Arc::clone(&state))
        .oneshot(
            Request::delete("/api/notifications")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["removed"], 1);

    let response = build_router(state)
        .oneshot(
            Request::get("/api/export/notifications/csv")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn report_export_renders_html() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::get("/api/export/withdrawals/report")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Gudang withdrawals"));
    assert!(html.contains("BRG003"));
}

#[tokio::test]
async fn accepting_an_order_books_the_arrival() {
    let state = make_test_state();

    let response = build_router(Arc::clone(&state))
        .oneshot(
            Request::post("/api/orders/1/accept")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "received");
    assert_eq!(json["arrived_quantity"], 50);

    // Seed order 1 covers BRG001, seeded at 120.
    let response = build_router(state)
        .oneshot(
            Request::get("/api/collections/stock")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json[0]["quantity"], 170);
}

#[tokio::test]
async fn accepting_an_unknown_order_is_404() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::post("/api/orders/99/accept")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pause_resume_round_trip() {
    let state = make_test_state();

    let response = build_router(Arc::clone(&state))
        .oneshot(Request::post("/api/sim/pause").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = build_router(Arc::clone(&state))
        .oneshot(Request::get("/api/sim/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["paused"], true);
    assert_eq!(json["seconds_until_next_event"], Value::Null);

    let response = build_router(Arc::clone(&state))
        .oneshot(
            Request::post("/api/sim/resume")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!state.control.is_paused());
}

#[tokio::test]
async fn interval_below_floor_is_rejected() {
    let router = build_router(make_test_state());

    let response = router
        .oneshot(
            Request::post("/api/sim/interval")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"interval_ms": 200}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn interval_update_is_reported_in_status() {
    let state = make_test_state();

    let response = build_router(Arc::clone(&state))
        .oneshot(
            Request::post("/api/sim/interval")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"interval_ms": 60000}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = build_router(state)
        .oneshot(Request::get("/api/sim/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["interval_ms"], 60_000);
}
