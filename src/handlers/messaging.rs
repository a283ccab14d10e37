//! Messaging-framework endpoint
//!
//! `POST /api/messaging` — same pipeline skeleton as the SWOT endpoint with
//! its own validation rules, template, sampling parameters, and a metadata
//! echo of the key input parameters.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;

use crate::analysis::{self, AnalysisKind, enrich, messaging::MessagingBody, prompts};
use crate::error::{AppError, AppResult};
use crate::handlers::AppState;

pub async fn handler(
    State(state): State<AppState>,
    body: Result<Json<MessagingBody>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(body) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let request = body.validate()?;

    tracing::info!(
        company = %request.company,
        product = %request.product,
        "generating messaging framework"
    );

    let spec = prompts::messaging_prompt(&request);
    let echo = enrich::MessagingEcho::from(&request);
    let mut document = analysis::generate(
        state.client(),
        state.metrics(),
        AnalysisKind::Messaging,
        &spec,
    )
    .await?;

    enrich::attach_metadata(
        &mut document,
        state.config().completion.model(),
        Some(&echo),
    );
    Ok(Json(document))
}
