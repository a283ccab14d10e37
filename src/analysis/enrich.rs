//! Result enrichment
//!
//! Stamps the recovered document with generation metadata. This stage never
//! fails: the recoverer has already guaranteed the document is a JSON object.

use chrono::Utc;
use serde_json::{Value, json};

use crate::analysis::messaging::MessagingRequest;

/// Schema version stamped into every successful response.
pub const SCHEMA_VERSION: &str = "1.0";

/// Input parameters echoed back in messaging metadata (null where absent).
#[derive(Debug, Clone)]
pub struct MessagingEcho {
    pub company: String,
    pub product: String,
    pub target_audience: Option<String>,
    pub tone_preference: Option<String>,
}

impl From<&MessagingRequest> for MessagingEcho {
    fn from(request: &MessagingRequest) -> Self {
        Self {
            company: request.company.clone(),
            product: request.product.clone(),
            target_audience: request.target_audience.clone(),
            tone_preference: request.tone_preference.clone(),
        }
    }
}

/// Attach the `metadata` object: RFC 3339 generation timestamp, model
/// identifier, schema version, and (messaging only) the input echo.
///
/// Non-object documents are left untouched; the recoverer rejects those
/// before this stage runs.
pub fn attach_metadata(document: &mut Value, model: &str, echo: Option<&MessagingEcho>) {
    let mut metadata = json!({
        "generatedAt": Utc::now().to_rfc3339(),
        "model": model,
        "version": SCHEMA_VERSION,
    });

    if let Some(echo) = echo {
        metadata["company"] = json!(echo.company);
        metadata["product"] = json!(echo.product);
        metadata["targetAudience"] = json!(echo.target_audience);
        metadata["tonePreference"] = json!(echo.tone_preference);
    }

    if let Value::Object(map) = document {
        map.insert("metadata".to_string(), metadata);
    }
}
