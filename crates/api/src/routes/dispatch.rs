//! Batch submission route.
//!
//! The request arrives already decoded: a template, an ordered recipient
//! list, and optionally the path of an attachment saved by an earlier
//! upload. Validation happens here; decomposition into tasks happens in
//! `courier-dispatch`.

use std::path::PathBuf;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use courier_common::error::AppError;
use courier_common::types::{Batch, DispatchReceipt, Recipient};
use courier_dispatch::submit;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/dispatch", post(dispatch_batch))
}

#[derive(Debug, Deserialize)]
pub struct DispatchRequest {
    pub template: String,
    pub recipients: Vec<Recipient>,
    pub attachment_path: Option<PathBuf>,
}

/// POST /api/dispatch — Validate and enqueue a batch.
///
/// Returns the receipt synchronously; delivery itself is fire-and-forget
/// on the worker's timeline.
async fn dispatch_batch(
    State(state): State<AppState>,
    Json(request): Json<DispatchRequest>,
) -> Result<Json<DispatchReceipt>, AppError> {
    if request.template.trim().is_empty() {
        return Err(AppError::Validation("template must not be empty".into()));
    }
    if request.recipients.is_empty() {
        return Err(AppError::Validation(
            "at least one recipient is required".into(),
        ));
    }
    if request.recipients.iter().any(|r| r.address.trim().is_empty()) {
        return Err(AppError::Validation(
            "every recipient needs a routing address".into(),
        ));
    }

    // The attachment is shared by the whole batch and must already be on
    // disk when the batch is accepted.
    if let Some(path) = &request.attachment_path {
        let exists = tokio::fs::try_exists(path).await.unwrap_or(false);
        if !exists {
            return Err(AppError::Validation(format!(
                "attachment not found: {}",
                path.display()
            )));
        }
    }

    let batch = Batch::new(
        request.template,
        request.recipients,
        request.attachment_path,
    );
    let receipt = submit(&state.queue, batch);

    Ok(Json(receipt))
}
