//! Prometheus metrics collection for Bizlens
//!
//! Tracks per-endpoint analysis request counts, classified failures, and how
//! often the JSON recoverer had to fall back to the brace scan. Exposed via
//! the `/metrics` endpoint in Prometheus text format.

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

use crate::analysis::AnalysisKind;

/// Metrics collector
///
/// One instance lives in `AppState`; counters are cheap to bump from any
/// handler. Label values come from closed enums so cardinality stays bounded.
pub struct Metrics {
    registry: Registry,
    requests: IntCounterVec,
    failures: IntCounterVec,
    salvaged: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new(
                "bizlens_analysis_requests_total",
                "Analysis requests that passed validation, by endpoint",
            ),
            &["endpoint"],
        )?;
        let failures = IntCounterVec::new(
            Opts::new(
                "bizlens_analysis_failures_total",
                "Failed analysis requests, by endpoint and error code",
            ),
            &["endpoint", "code"],
        )?;
        let salvaged = IntCounterVec::new(
            Opts::new(
                "bizlens_salvaged_responses_total",
                "Responses recovered via the brace-scan fallback, by endpoint",
            ),
            &["endpoint"],
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(failures.clone()))?;
        registry.register(Box::new(salvaged.clone()))?;

        Ok(Self {
            registry,
            requests,
            failures,
            salvaged,
        })
    }

    /// Record a validated analysis request.
    pub fn request(&self, kind: AnalysisKind) {
        self.requests.with_label_values(&[kind.as_str()]).inc();
    }

    /// Record a classified failure.
    pub fn failure(&self, kind: AnalysisKind, code: &str) {
        self.failures
            .with_label_values(&[kind.as_str(), code])
            .inc();
    }

    /// Record a brace-scan salvage. A rising rate means the model is drifting
    /// from the JSON-only instruction.
    pub fn salvage(&self, kind: AnalysisKind) {
        self.salvaged.with_label_values(&[kind.as_str()]).inc();
    }

    /// Encode all metrics in Prometheus text format.
    pub fn gather(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
