use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use crate::angles::label::{render_label, LabelSlot};
use crate::angles::store::AngleSet;
use crate::http::response::ApiError;
use crate::http::server::AppState;

/// `POST /save_angles`. Replaces the stored set with the body as given.
pub async fn save_angles(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload?;
    let Value::Object(values) = payload else {
        return Err(ApiError::MalformedRequest(
            "Angles must be a JSON object".to_string(),
        ));
    };

    let keys = values.len();
    state.angles.save(&AngleSet::new(values)).await?;
    tracing::info!(keys, "Angles saved");

    Ok(Json(json!({ "message": "Angles saved successfully" })))
}

/// `GET /get_angles`.
pub async fn get_angles(State(state): State<AppState>) -> Result<Json<AngleSet>, ApiError> {
    Ok(Json(state.angles.load().await?))
}

/// `GET /qr{n}`. Plain text label for one slot.
pub async fn qr_label(state: AppState, slot: LabelSlot) -> Result<String, ApiError> {
    let angles = state.angles.load().await?;
    let label = render_label(&angles, slot);
    tracing::debug!(slot = slot.get(), label = %label, "Label rendered");
    Ok(label)
}
