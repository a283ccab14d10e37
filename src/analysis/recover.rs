//! Best-effort JSON recovery from model output
//!
//! Models are instructed to emit JSON only, but that textual contract is not
//! enforceable. Recovery is a two-step heuristic:
//!
//! 1. Trim and parse the whole output as JSON.
//! 2. On failure, slice from the first `{` to the last `}` and parse that.
//!
//! Known limitation (deliberate): the brace scan is not a tokenizer. Output
//! with multiple brace-delimited JSON-ish substrings, or braces inside string
//! literals surrounding the object, can still fail or in principle salvage
//! the wrong substring. That matches the intended behavior; the model's
//! output is untrusted and there is no better recovery short of full parsing,
//! which would still have to guess which substring the model meant.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecoverError {
    /// Neither the full output nor any brace-delimited substring parsed as a
    /// JSON object.
    #[error("no JSON object could be recovered from model output")]
    NoJsonObject,

    /// The output parsed, but to a scalar or array rather than an object.
    #[error("model output parsed to a non-object JSON value")]
    NotAnObject,
}

/// A successfully recovered document.
#[derive(Debug)]
pub struct Recovered {
    pub document: Value,
    /// True when the brace-scan fallback was needed (surfaced in metrics).
    pub salvaged: bool,
}

/// Recover a JSON object from raw completion output.
pub fn recover_object(raw: &str) -> Result<Recovered, RecoverError> {
    let trimmed = raw.trim();

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            return Ok(Recovered {
                document: Value::Object(map),
                salvaged: false,
            });
        }
        Ok(_) => {
            // Parsed but wrong shape; a wrapped object may still be present.
            if let Some(document) = salvage_braced_object(trimmed) {
                return Ok(Recovered {
                    document,
                    salvaged: true,
                });
            }
            return Err(RecoverError::NotAnObject);
        }
        Err(_) => {}
    }

    salvage_braced_object(trimmed)
        .map(|document| Recovered {
            document,
            salvaged: true,
        })
        .ok_or(RecoverError::NoJsonObject)
}

/// Locate the outermost brace-delimited substring and try to parse it.
fn salvage_braced_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}
