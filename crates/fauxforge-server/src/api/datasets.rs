use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use tokio_util::sync::CancellationToken;
use tracing::info;

use fauxforge_core::{
    Dataset, GenerateDataRequest, GenerateDataResponse, ListFilesResponse, MessageResponse,
    ValidatedRequest,
};

use super::error::{ApiError, DELETED_MESSAGE};
use crate::state::AppState;

pub(super) async fn generate_data(
    State(state): State<AppState>,
    body: Result<Json<GenerateDataRequest>, JsonRejection>,
) -> Result<Json<GenerateDataResponse>, ApiError> {
    let Json(request) = body?;
    let ValidatedRequest { schema, count } = request.validate(state.config.max_count)?;

    // Cancelled on every exit path, including the client going away, so
    // the blocking worker stops at its next checkpoint.
    let cancel = CancellationToken::new();
    let _cancel_on_drop = cancel.clone().drop_guard();

    let engine = Arc::clone(&state.engine);
    let task = tokio::task::spawn_blocking(move || {
        let mut rng = rand::rng();
        engine.run(&schema, count, &mut rng, Some(&cancel))
    });

    let timeout = state.config.generation_timeout;
    let result = match tokio::time::timeout(timeout, task).await {
        Ok(joined) => joined.map_err(|err| ApiError::Internal(err.to_string()))??,
        Err(_) => {
            return Err(ApiError::Unavailable(format!(
                "generation did not finish within {} ms",
                timeout.as_millis()
            )));
        }
    };

    let key = state.store.put(&result.records).await?;
    info!(
        key = %key,
        records = result.records.len(),
        run_id = %result.report.run_id,
        "dataset generated"
    );
    Ok(Json(GenerateDataResponse {
        key,
        data: result.records,
    }))
}

pub(super) async fn get_data(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<Dataset>, ApiError> {
    let records = state.store.get(&key).await?;
    Ok(Json(records))
}

pub(super) async fn list_files(
    State(state): State<AppState>,
) -> Result<Json<ListFilesResponse>, ApiError> {
    let files = state.store.list().await?;
    Ok(Json(ListFilesResponse { files }))
}

pub(super) async fn delete_data(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete(&key).await?;
    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
