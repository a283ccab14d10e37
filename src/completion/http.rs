//! Reqwest-backed completion client
//!
//! Talks to an OpenAI-style `/chat/completions` endpoint with a bearer
//! credential. Issues exactly one POST per `complete` call and translates the
//! provider's error body into the closed [`CompletionError`] set using the
//! machine-readable `code`/`type` discriminator, not the human message.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::completion::{CompletionClient, CompletionError, PromptSpec};
use crate::config::CompletionConfig;
use crate::error::{AppError, AppResult};

/// Provider error codes that indicate exhausted quota rather than transient
/// rate limiting. OpenAI-compatible providers report both under HTTP 429 and
/// disambiguate via this code.
const QUOTA_CODES: &[&str] = &["insufficient_quota", "billing_hard_limit_reached"];

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

/// Error body shape shared by OpenAI-compatible providers:
/// `{"error": {"message": ..., "type": ..., "code": ...}}`
#[derive(Debug, Deserialize, Default)]
struct ProviderErrorBody {
    #[serde(default)]
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize, Default)]
struct ProviderErrorDetail {
    #[serde(default)]
    code: Option<String>,
    #[serde(rename = "type", default)]
    kind: Option<String>,
}

impl ProviderErrorDetail {
    /// Best-available discriminator: `code` if present, else `type`.
    fn discriminator(&self) -> &str {
        self.code
            .as_deref()
            .or(self.kind.as_deref())
            .unwrap_or("unknown")
    }
}

/// Production completion client
///
/// Constructed once at startup and shared across requests via `AppState`.
/// The reqwest client carries the configured request timeout; no additional
/// timeout or cancellation is imposed here.
pub struct HttpCompletionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl HttpCompletionClient {
    /// Build a client from validated completion configuration.
    pub fn new(config: &CompletionConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds()))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: format!(
                "{}/chat/completions",
                config.base_url().trim_end_matches('/')
            ),
            api_key: config.api_key().to_string(),
            model: config.model().to_string(),
        })
    }

    /// Model identifier sent with every completion call (also stamped into
    /// response metadata).
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Classify a non-success provider response.
    ///
    /// HTTP 429 covers both quota exhaustion and rate limiting; the error
    /// body's code tells them apart. Anything else becomes `Api` and is
    /// surfaced to the caller as a generic pipeline failure.
    fn classify_failure(status: u16, body: ProviderErrorBody) -> CompletionError {
        let discriminator = body.error.discriminator().to_string();

        if QUOTA_CODES.contains(&discriminator.as_str()) {
            return CompletionError::QuotaExceeded;
        }
        if status == 429 {
            return CompletionError::RateLimited;
        }
        CompletionError::Api {
            status,
            code: discriminator,
        }
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, spec: &PromptSpec) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: spec.system,
                },
                ChatMessage {
                    role: "user",
                    content: &spec.user,
                },
            ],
            max_tokens: spec.max_tokens,
            temperature: spec.temperature,
        };

        tracing::debug!(
            model = %self.model,
            max_tokens = spec.max_tokens,
            temperature = spec.temperature,
            prompt_length = spec.user.len(),
            "sending completion request"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Error bodies that fail to parse still classify by status alone.
            let body = response
                .json::<ProviderErrorBody>()
                .await
                .unwrap_or_default();
            let err = Self::classify_failure(status.as_u16(), body);
            tracing::warn!(status = status.as_u16(), error = %err, "completion call failed");
            return Err(err);
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Transport(format!("invalid response body: {e}")))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.trim().is_empty())
            .ok_or(CompletionError::EmptyResponse)?;

        tracing::debug!(response_length = content.len(), "completion call succeeded");
        Ok(content)
    }
}
