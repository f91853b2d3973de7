//! `GET /`: API description or the angle entry form.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::config::IndexPage;
use crate::http::server::AppState;

const ANGLE_FORM: &str = include_str!("../../assets/angle_form.html");

pub async fn index(State(state): State<AppState>) -> Response {
    match state.index_page {
        IndexPage::ApiDocs => Json(api_docs()).into_response(),
        IndexPage::AngleForm => Html(ANGLE_FORM).into_response(),
    }
}

fn api_docs() -> serde_json::Value {
    json!({
        "message": "MotorBrew Upload API",
        "endpoints": {
            "POST /upload/": "Upload data (requires x-api-key header and {\"data\": {...}} format)",
            "GET /uploads/": "Get all saved uploads",
            "POST /reset/": "Reset all uploads",
            "POST /save_angles": "Save angle1..angle5 as a JSON object",
            "GET /get_angles": "Get the saved angles",
            "GET /qr1 .. /qr5": "Label text {n}_{angle}_MotorBrew"
        },
        "example": {
            "curl": "curl -X POST -H \"x-api-key: mykey\" -H \"Content-Type: application/json\" -d '{\"data\":{\"banana\":1,\"clock\":2}}' http://your-url/upload/"
        }
    })
}
