//! HTTP request handlers for the Bizlens API

use std::sync::Arc;

use axum::{
    Router,
    http::HeaderValue,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{catch_panic::CatchPanicLayer, cors::AllowOrigin, cors::CorsLayer, trace::TraceLayer};

use crate::completion::{CompletionClient, HttpCompletionClient};
use crate::config::{Config, CorsConfig};
use crate::error::{AppError, AppResult};
use crate::metrics::Metrics;
use crate::middleware::request_id_middleware;

pub mod health;
pub mod index;
pub mod messaging;
pub mod metrics;
pub mod stubs;
pub mod swot;

/// Application state shared across all handlers
///
/// The completion client is held as a trait object: production wires in the
/// reqwest-backed client, tests substitute a stub so no handler test touches
/// the network. All fields are Arc'd for cheap cloning across Axum handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    client: Arc<dyn CompletionClient>,
    metrics: Arc<Metrics>,
}

impl AppState {
    /// Create state with the production HTTP completion client.
    pub fn new(config: Arc<Config>) -> AppResult<Self> {
        let client = Arc::new(HttpCompletionClient::new(&config.completion)?);
        Self::with_client(config, client)
    }

    /// Create state with an injected completion client (the test seam).
    pub fn with_client(config: Arc<Config>, client: Arc<dyn CompletionClient>) -> AppResult<Self> {
        let metrics = Metrics::new()
            .map_err(|e| AppError::Config(format!("failed to create metrics registry: {e}")))?;

        Ok(Self {
            config,
            client,
            metrics: Arc::new(metrics),
        })
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get reference to the completion client
    pub fn client(&self) -> &dyn CompletionClient {
        self.client.as_ref()
    }

    /// Get reference to the metrics collector
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

/// Build the full application router with all routes and middleware layers.
///
/// Used by both `main` and the integration tests so the tested surface is the
/// served surface.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config().cors);

    Router::new()
        .route("/", get(index::banner))
        .route("/health", get(health::handler))
        .route("/metrics", get(metrics::handler))
        .route("/api/swot", post(swot::handler))
        .route("/api/messaging", post(messaging::handler))
        .route("/api/competitor", post(stubs::competitor))
        .route("/api/personas", post(stubs::personas))
        .fallback(index::fallback)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from the configured origin allow-list.
///
/// Origins that fail header-value parsing are logged and skipped rather than
/// failing startup; an empty list leaves the layer restrictive.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::AllowMethods::mirror_request())
        .allow_headers(tower_http::cors::AllowHeaders::mirror_request())
}

/// Catch-all for panicking handlers: log server-side, return the generic
/// internal error body with no detail leaking across the boundary.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(detail = %detail, "handler panicked");

    let body = serde_json::json!({
        "error": "Internal server error",
        "code": "INTERNAL_ERROR",
    });
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(body),
    )
        .into_response()
}
