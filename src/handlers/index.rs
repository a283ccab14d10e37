//! Service banner and 404 fallback
//!
//! Both responses carry the endpoint listing so callers hitting the wrong
//! path can see what is available.

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Listing of every routed endpoint, shared by the banner and the fallback.
pub fn endpoint_listing() -> Value {
    json!([
        { "method": "GET",  "path": "/",               "description": "Service banner" },
        { "method": "GET",  "path": "/health",         "description": "Liveness check" },
        { "method": "GET",  "path": "/metrics",        "description": "Prometheus metrics" },
        { "method": "POST", "path": "/api/swot",       "description": "SWOT analysis" },
        { "method": "POST", "path": "/api/messaging",  "description": "Product messaging framework" },
        { "method": "POST", "path": "/api/competitor", "description": "Competitor analysis (coming soon)" },
        { "method": "POST", "path": "/api/personas",   "description": "Customer personas (coming soon)" },
    ])
}

/// `GET /` — service banner with the endpoint listing.
pub async fn banner() -> Json<Value> {
    Json(json!({
        "service": "bizlens",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": endpoint_listing(),
    }))
}

/// Fallback for unrouted paths: 404 plus the endpoint listing to aid debugging.
pub async fn fallback() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "endpoints": endpoint_listing(),
        })),
    )
}
