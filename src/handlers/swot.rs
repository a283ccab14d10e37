//! SWOT analysis endpoint
//!
//! `POST /api/swot` — validate, synthesize the prompt, call the completion
//! API once, recover the JSON document, stamp metadata.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;

use crate::analysis::{self, AnalysisKind, enrich, prompts, swot::SwotBody};
use crate::error::{AppError, AppResult};
use crate::handlers::AppState;

pub async fn handler(
    State(state): State<AppState>,
    body: Result<Json<SwotBody>, JsonRejection>,
) -> AppResult<Json<Value>> {
    // Malformed JSON bodies become the service's own 400 shape instead of
    // the framework's plain-text rejection.
    let Json(body) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let request = body.validate()?;

    tracing::info!(company = %request.company, "generating SWOT analysis");

    let spec = prompts::swot_prompt(&request);
    let mut document =
        analysis::generate(state.client(), state.metrics(), AnalysisKind::Swot, &spec).await?;

    enrich::attach_metadata(&mut document, state.config().completion.model(), None);
    Ok(Json(document))
}
