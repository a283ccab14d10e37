//! SWOT request validation
//!
//! The body deserializes with every field optional so that missing or invalid
//! fields produce the service's own 400 JSON rejection naming the field,
//! before any collaborator call is made.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Upper bound on the `company` field (characters, Unicode-aware).
pub const MAX_COMPANY_LEN: usize = 100;

/// Raw SWOT request body as received on the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwotBody {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub additional_context: Option<String>,
}

/// A validated, normalized SWOT request.
#[derive(Debug, Clone)]
pub struct SwotRequest {
    pub company: String,
    pub industry: Option<String>,
    pub additional_context: Option<String>,
}

impl SwotBody {
    /// Validate and normalize.
    ///
    /// `company` is required, non-empty after trimming, and at most
    /// [`MAX_COMPANY_LEN`] characters. Optional fields pass through verbatim;
    /// the prompt layer substitutes fallback text when they are absent.
    pub fn validate(self) -> AppResult<SwotRequest> {
        let company = self
            .company
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::Validation("company is required".to_string()))?;

        if company.chars().count() > MAX_COMPANY_LEN {
            return Err(AppError::Validation(format!(
                "company must be {MAX_COMPANY_LEN} characters or fewer"
            )));
        }

        Ok(SwotRequest {
            company: company.to_string(),
            industry: self.industry,
            additional_context: self.additional_context,
        })
    }
}
