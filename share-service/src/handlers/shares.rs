use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use invoice_core::error::AppError;

use crate::dtos::{ShareCreatedResponse, SharePayload};
use crate::startup::AppState;

pub async fn create_share(
    State(state): State<AppState>,
    Json(payload): Json<SharePayload>,
) -> Result<impl IntoResponse, AppError> {
    let invoice = payload
        .invoice
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Invalid payload")))?;

    let id = state
        .store
        .create(invoice, payload.design)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to write share record");
            AppError::Storage(anyhow::anyhow!("Failed to save share"))
        })?;

    // Best-effort purge of old shares on write. Detached on purpose: the
    // response never waits for it and its failures never reach the caller.
    let store = state.store.clone();
    let retention_days = state.config.storage.retention_days;
    tokio::spawn(async move {
        match store.purge(retention_days).await {
            Ok(stats) if stats.deleted > 0 => {
                tracing::info!(
                    deleted = stats.deleted,
                    scanned = stats.scanned,
                    "purged expired shares"
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "share purge failed"),
        }
    });

    Ok((StatusCode::CREATED, Json(ShareCreatedResponse { id })))
}

pub async fn get_share(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let record = state.store.read(&id).await?;
    Ok(Json(record))
}
