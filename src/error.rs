//! Error types for Bizlens
//!
//! All errors implement `IntoResponse` for Axum handlers. Every error body is
//! a JSON object with at least an `error` field; machine-readable codes are
//! attached where callers need to distinguish conditions (quota vs rate limit
//! vs terminal pipeline failure).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::analysis::AnalysisKind;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    /// Completion provider reported quota exhaustion (plan/billing limit)
    #[error("Completion provider quota exhausted")]
    QuotaExceeded,

    /// Completion provider rejected the call due to rate limiting
    #[error("Completion provider rate limited")]
    RateLimited,

    /// The pipeline failed after validation: the completion call errored or
    /// the model output could not be coerced into the expected JSON shape.
    ///
    /// `reason` is logged server-side only; the caller receives the generic
    /// per-endpoint message and failure code.
    #[error("{} ({}): {reason}", kind.failure_message(), kind.failure_code())]
    AnalysisFailed { kind: AnalysisKind, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            Self::QuotaExceeded => (
                StatusCode::TOO_MANY_REQUESTS,
                serde_json::json!({
                    "error": "API quota exceeded. Please check your plan and billing details.",
                    "code": "QUOTA_EXCEEDED",
                }),
            ),
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                serde_json::json!({
                    "error": "Rate limit exceeded. Please try again shortly.",
                    "code": "RATE_LIMITED",
                }),
            ),
            Self::AnalysisFailed { kind, reason } => {
                // Full detail stays server-side; callers get the generic message.
                tracing::error!(
                    endpoint = kind.as_str(),
                    reason = %reason,
                    "analysis pipeline failed"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "error": kind.failure_message(),
                        "code": kind.failure_code(),
                    }),
                )
            }
            Self::Config(msg) | Self::Internal(msg) => {
                tracing::error!(detail = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    serde_json::json!({
                        "error": "Internal server error",
                        "code": "INTERNAL_ERROR",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for Results
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_creates() {
        let err = AppError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_error_creates() {
        let err = AppError::Validation("company is required".to_string());
        assert_eq!(err.to_string(), "Invalid request: company is required");
    }

    #[test]
    fn test_validation_error_response_status() {
        let err = AppError::Validation("test".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_quota_error_response_status() {
        let err = AppError::QuotaExceeded;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_rate_limited_response_status() {
        let err = AppError::RateLimited;
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_analysis_failed_response_status() {
        let err = AppError::AnalysisFailed {
            kind: AnalysisKind::Swot,
            reason: "no JSON object in output".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_analysis_failed_display_includes_code() {
        let err = AppError::AnalysisFailed {
            kind: AnalysisKind::Messaging,
            reason: "boom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("MESSAGING_FAILED"));
        assert!(msg.contains("boom"));
    }

    #[test]
    fn test_internal_error_response_status() {
        let err = AppError::Internal("unexpected state".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
