//! Messaging-framework request validation
//!
//! `company` and `product` are required and trimmed; no length cap is
//! enforced on either (matching the SWOT endpoint's deliberate asymmetry).
//! The six optional fields pass through verbatim.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Raw messaging request body as received on the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagingBody {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub key_features: Option<String>,
    #[serde(default)]
    pub competitors: Option<String>,
    #[serde(default)]
    pub business_goals: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub tone_preference: Option<String>,
}

/// A validated, normalized messaging request.
#[derive(Debug, Clone)]
pub struct MessagingRequest {
    pub company: String,
    pub product: String,
    pub target_audience: Option<String>,
    pub key_features: Option<String>,
    pub competitors: Option<String>,
    pub business_goals: Option<String>,
    pub industry: Option<String>,
    pub tone_preference: Option<String>,
}

impl MessagingBody {
    /// Validate and normalize. Rejections name the first missing field.
    pub fn validate(self) -> AppResult<MessagingRequest> {
        let company = require_field(self.company.as_deref(), "company")?;
        let product = require_field(self.product.as_deref(), "product")?;

        Ok(MessagingRequest {
            company,
            product,
            target_audience: self.target_audience,
            key_features: self.key_features,
            competitors: self.competitors,
            business_goals: self.business_goals,
            industry: self.industry,
            tone_preference: self.tone_preference,
        })
    }
}

fn require_field(value: Option<&str>, name: &str) -> AppResult<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("{name} is required")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_body() -> MessagingBody {
        MessagingBody {
            company: Some("Acme".to_string()),
            product: Some("RoadRunner Tracker".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_minimal_body() {
        let request = valid_body().validate().expect("should validate");
        assert_eq!(request.company, "Acme");
        assert_eq!(request.product, "RoadRunner Tracker");
        assert!(request.tone_preference.is_none());
    }

    #[test]
    fn test_missing_company_rejected_first() {
        let body = MessagingBody {
            product: Some("Widget".to_string()),
            ..Default::default()
        };
        let err = body.validate().unwrap_err();
        assert!(err.to_string().contains("company is required"));
    }

    #[test]
    fn test_missing_product_rejected() {
        let body = MessagingBody {
            company: Some("Acme".to_string()),
            ..Default::default()
        };
        let err = body.validate().unwrap_err();
        assert!(err.to_string().contains("product is required"));
    }

    #[test]
    fn test_whitespace_only_product_rejected() {
        let mut body = valid_body();
        body.product = Some("  \t ".to_string());
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_required_fields_are_trimmed() {
        let mut body = valid_body();
        body.company = Some("  Acme  ".to_string());
        let request = body.validate().expect("should validate");
        assert_eq!(request.company, "Acme");
    }

    #[test]
    fn test_no_length_cap_on_company_or_product() {
        let mut body = valid_body();
        body.company = Some("c".repeat(5000));
        body.product = Some("p".repeat(5000));
        assert!(body.validate().is_ok());
    }

    #[test]
    fn test_optional_fields_pass_through() {
        let mut body = valid_body();
        body.tone_preference = Some("bold".to_string());
        body.competitors = Some("Initech, Globex".to_string());
        let request = body.validate().expect("should validate");
        assert_eq!(request.tone_preference.as_deref(), Some("bold"));
        assert_eq!(request.competitors.as_deref(), Some("Initech, Globex"));
    }

    #[test]
    fn test_body_deserializes_camel_case() {
        let json = r#"{
            "company": "Acme",
            "product": "Widget",
            "targetAudience": "SMB owners",
            "keyFeatures": "fast, cheap",
            "businessGoals": "grow ARR",
            "tonePreference": "friendly"
        }"#;
        let body: MessagingBody = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(body.target_audience.as_deref(), Some("SMB owners"));
        assert_eq!(body.tone_preference.as_deref(), Some("friendly"));
    }
}
