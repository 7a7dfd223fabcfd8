//! Gateway status routes — read-only queries proxied to the bridge.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use courier_common::error::AppError;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/gateway/status", get(gateway_status))
        .route("/api/gateway/qr", get(gateway_qr))
}

/// GET /api/gateway/status — Connection status of the bridge process.
async fn gateway_status(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let payload = state.proxy.get_status().await?;
    Ok(Json(payload))
}

/// GET /api/gateway/qr — Pairing QR payload from the bridge process.
async fn gateway_qr(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let payload = state.proxy.get_pairing_qr().await?;
    Ok(Json(payload))
}
