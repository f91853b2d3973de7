use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::uploads::types::{UploadList, UploadResponse};

/// `POST /upload/`. The api key was already checked by middleware.
pub async fn create_upload(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    let Json(payload) = payload?;
    let record = state.uploads.append_payload(&payload)?;

    tracing::info!(
        upload_id = record.id,
        items = record.data.len(),
        "Upload stored"
    );

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Upload successful".to_string(),
            upload: record,
        }),
    ))
}

/// `GET /uploads/`.
pub async fn list_uploads(State(state): State<AppState>) -> Json<UploadList> {
    let (count, uploads) = state.uploads.list();
    Json(UploadList { count, uploads })
}

/// `POST /reset/`.
pub async fn reset_uploads(State(state): State<AppState>) -> Json<Value> {
    let dropped = state.uploads.reset();
    tracing::info!(count = dropped, "Uploads reset");

    Json(json!({ "message": "Uploads reset successfully" }))
}
