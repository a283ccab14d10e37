//! Stubbed analysis endpoints
//!
//! `/api/competitor` and `/api/personas` are routed but not yet implemented.
//! They answer 501 regardless of request body, so no extractor runs.

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

fn under_development(name: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "error": format!("{name} analysis is under development"),
            "status": "coming_soon",
        })),
    )
}

/// `POST /api/competitor`
pub async fn competitor() -> (StatusCode, Json<Value>) {
    under_development("Competitor")
}

/// `POST /api/personas`
pub async fn personas() -> (StatusCode, Json<Value>) {
    under_development("Persona")
}
