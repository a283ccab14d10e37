//! Completion client abstraction
//!
//! The hosted chat-completion API is the service's only external collaborator.
//! It is modeled as a trait with a single `complete` capability so handlers can
//! be exercised in tests with a stub that never touches the network.

use async_trait::async_trait;
use thiserror::Error;

pub mod http;

pub use http::HttpCompletionClient;

/// Everything the pipeline sends to the completion API for one request:
/// a fixed system instruction, the synthesized user prompt, and the
/// per-analysis-type sampling parameters.
///
/// Constructed once per request and discarded after the call.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    pub system: &'static str,
    pub user: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Closed set of collaborator error conditions
///
/// The adapter translates the provider's error representation into these
/// variants; downstream classification matches on the variant, never on
/// message text.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Plan or billing quota exhausted (distinct from transient rate limiting)
    #[error("completion provider quota exhausted")]
    QuotaExceeded,

    /// Provider rejected the call due to request-rate limits
    #[error("completion provider rate limited")]
    RateLimited,

    /// Any other provider-reported failure (bad credentials, server error, ...)
    #[error("completion API error (status {status}, code {code})")]
    Api { status: u16, code: String },

    /// Network-level failure before a provider response was received
    #[error("completion transport error: {0}")]
    Transport(String),

    /// Provider returned a well-formed response with no message content
    #[error("completion response contained no content")]
    EmptyResponse,
}

/// Trait for the hosted completion API
///
/// Exactly one call is made per inbound request; no retry or backoff is
/// performed here. Whatever timeout the underlying HTTP client enforces is
/// inherited.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send one two-message conversation (system + user) and return the raw
    /// generated text.
    async fn complete(&self, spec: &PromptSpec) -> Result<String, CompletionError>;
}
