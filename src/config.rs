//! Configuration management for Bizlens
//!
//! Parses TOML configuration files and provides typed access to settings.
//! The completion credential may come from the `BIZLENS_API_KEY` environment
//! variable instead of the file so it stays out of version control.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Environment variable that overrides `completion.api_key` when set.
pub const API_KEY_ENV: &str = "BIZLENS_API_KEY";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub completion: CompletionConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from a TOML file, apply the credential environment
    /// override, and validate the result.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        let mut config: Config = toml::from_str(&raw).map_err(|e| {
            AppError::Config(format!("failed to parse {}: {e}", path.display()))
        })?;

        config.completion.merge_api_key(std::env::var(API_KEY_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Validate settings that serde cannot express.
    ///
    /// Invalid configuration fails startup rather than surfacing mid-request.
    pub fn validate(&self) -> AppResult<()> {
        if self.server.port == 0 {
            return Err(AppError::Config("server.port must be non-zero".to_string()));
        }
        self.completion.validate()?;
        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Completion API configuration
///
/// Fields are private so a validated config cannot be mutated afterwards;
/// access goes through the accessors below.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CompletionConfig {
    base_url: String,
    model: String,
    #[serde(default)]
    api_key: String,
    #[serde(default = "default_request_timeout")]
    request_timeout_seconds: u64,
}

fn default_request_timeout() -> u64 {
    60
}

impl CompletionConfig {
    /// Base URL of the OpenAI-style provider (no trailing `/chat/completions`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Model identifier sent with every completion call.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Bearer credential for the provider.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Timeout applied to the single outbound completion call.
    pub fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }

    /// Replace the file-sourced credential with the environment override,
    /// when present. Extracted from `from_file` so the merge is testable
    /// without mutating process environment.
    pub fn merge_api_key(&mut self, override_key: Option<String>) {
        if let Some(key) = override_key
            && !key.trim().is_empty()
        {
            self.api_key = key;
        }
    }

    fn validate(&self) -> AppResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "completion.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::Config(
                "completion.model must be non-empty".to_string(),
            ));
        }
        if self.api_key.trim().is_empty() {
            return Err(AppError::Config(format!(
                "completion.api_key is not set; provide it in the config file or via {API_KEY_ENV}"
            )));
        }
        if self.request_timeout_seconds == 0 || self.request_timeout_seconds > 300 {
            return Err(AppError::Config(format!(
                "completion.request_timeout_seconds must be in 1..=300, got {}",
                self.request_timeout_seconds
            )));
        }
        Ok(())
    }
}

/// CORS configuration
///
/// `allowed_origins` is an allow-list; an empty list (the default) leaves the
/// CORS layer restrictive, serving same-origin callers only.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Observability configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
