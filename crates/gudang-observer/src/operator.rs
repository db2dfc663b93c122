//! Simulator control REST handlers.
//!
//! These endpoints are separate from the read-only dashboard API: they
//! carry one-way command authority from the operator to the simulator
//! loop via the shared [`SimControl`](gudang_sim::SimControl).
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/sim/pause` | Pause the event timer |
//! | `POST` | `/api/sim/resume` | Resume the event timer |
//! | `POST` | `/api/sim/interval` | Set the event interval (ms) |
//! | `GET` | `/api/sim/status` | Current simulator status |

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

use crate::error::ObserverError;
use crate::state::AppState;

/// Request body for `POST /api/sim/interval`.
#[derive(Debug, serde::Deserialize)]
pub struct SetIntervalRequest {
    /// New event interval in milliseconds (minimum 1000).
    pub interval_ms: u64,
}

/// Generic success response.
#[derive(Debug, serde::Serialize)]
struct OperatorResponse {
    /// Whether the operation succeeded.
    ok: bool,
    /// Human-readable message.
    message: String,
}

/// Pause the simulator.
///
/// The event timer stops and the countdown disappears until resumed.
pub async fn pause(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.control.pause();
    Json(OperatorResponse {
        ok: true,
        message: String::from("Simulator paused"),
    })
}

/// Resume the simulator after a pause.
///
/// The timer restarts a full interval; no event fires immediately.
pub async fn resume(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.control.resume();
    Json(OperatorResponse {
        ok: true,
        message: String::from("Simulator resumed"),
    })
}

/// Set the event interval. Takes effect from the next tick.
pub async fn set_interval(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SetIntervalRequest>,
) -> Result<impl IntoResponse, ObserverError> {
    state.control.set_interval_ms(request.interval_ms).map_or_else(
        || {
            Err(ObserverError::InvalidRequest(format!(
                "interval_ms {} below the 1000ms floor",
                request.interval_ms
            )))
        },
        |previous| {
            Ok(Json(OperatorResponse {
                ok: true,
                message: format!(
                    "Interval set to {}ms (was {previous}ms)",
                    request.interval_ms
                ),
            }))
        },
    )
}

/// Current simulator status, countdown included.
pub async fn status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.control.status())
}
