//! The prompt-to-structured-result pipeline
//!
//! Both live endpoints share one skeleton: validate → synthesize prompt →
//! call the completion API once → recover a JSON object from the raw text →
//! stamp metadata. The endpoint-specific pieces (validation rules, templates,
//! sampling parameters, failure code) are parameterized; the pipeline itself
//! lives here.

use serde_json::Value;

use crate::completion::{CompletionClient, CompletionError, PromptSpec};
use crate::error::{AppError, AppResult};
use crate::metrics::Metrics;

pub mod enrich;
pub mod messaging;
pub mod prompts;
pub mod recover;
pub mod swot;

/// The two live analysis types.
///
/// Carries the endpoint-specific error classification so the classifier never
/// needs to know which handler it is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Swot,
    Messaging,
}

impl AnalysisKind {
    /// Label used for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisKind::Swot => "swot",
            AnalysisKind::Messaging => "messaging",
        }
    }

    /// Machine-readable code returned on terminal pipeline failure.
    pub fn failure_code(&self) -> &'static str {
        match self {
            AnalysisKind::Swot => "ANALYSIS_FAILED",
            AnalysisKind::Messaging => "MESSAGING_FAILED",
        }
    }

    /// Generic caller-facing message for terminal pipeline failure. The
    /// model's malformed output is not the caller's fault to diagnose, so no
    /// detail crosses the boundary.
    pub fn failure_message(&self) -> &'static str {
        match self {
            AnalysisKind::Swot => "Failed to generate SWOT analysis",
            AnalysisKind::Messaging => "Failed to generate messaging framework",
        }
    }
}

/// Run the shared pipeline stages that follow validation: one completion
/// call, then best-effort JSON recovery.
///
/// Returns the recovered document, not yet enriched; handlers attach
/// metadata afterwards because the echo fields differ per endpoint.
pub async fn generate(
    client: &dyn CompletionClient,
    metrics: &Metrics,
    kind: AnalysisKind,
    spec: &PromptSpec,
) -> AppResult<Value> {
    metrics.request(kind);

    let raw = client
        .complete(spec)
        .await
        .map_err(|e| classify_completion_error(kind, metrics, e))?;

    match recover::recover_object(&raw) {
        Ok(recovered) => {
            if recovered.salvaged {
                tracing::warn!(
                    endpoint = kind.as_str(),
                    "model output was not pure JSON; salvaged object via brace scan"
                );
                metrics.salvage(kind);
            }
            Ok(recovered.document)
        }
        Err(e) => {
            metrics.failure(kind, kind.failure_code());
            Err(AppError::AnalysisFailed {
                kind,
                reason: format!("{e}; raw output length {}", raw.len()),
            })
        }
    }
}

/// Map collaborator error variants onto the HTTP error taxonomy.
///
/// Quota and rate-limit conditions keep their distinct retry-later codes;
/// everything else is a terminal per-endpoint failure.
fn classify_completion_error(
    kind: AnalysisKind,
    metrics: &Metrics,
    error: CompletionError,
) -> AppError {
    match error {
        CompletionError::QuotaExceeded => {
            metrics.failure(kind, "QUOTA_EXCEEDED");
            AppError::QuotaExceeded
        }
        CompletionError::RateLimited => {
            metrics.failure(kind, "RATE_LIMITED");
            AppError::RateLimited
        }
        other => {
            metrics.failure(kind, kind.failure_code());
            AppError::AnalysisFailed {
                kind,
                reason: other.to_string(),
            }
        }
    }
}
