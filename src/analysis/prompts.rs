//! Prompt synthesis
//!
//! Pure functions from validated requests to [`PromptSpec`]s. Each user
//! prompt embeds every provided field (with `Not specified` substituted for
//! absent optional fields) plus a literal example of the exact JSON object
//! the model must return. The closing "JSON only, no prose" instruction and
//! the schema example are the service's only defense against malformed
//! output; both are load-bearing.
//!
//! Sampling parameters are fixed per analysis type: SWOT runs tighter (lower
//! cap, lower temperature, more deterministic), messaging runs looser (higher
//! cap, higher temperature, more generative).

use crate::analysis::messaging::MessagingRequest;
use crate::analysis::swot::SwotRequest;
use crate::completion::PromptSpec;

/// Substituted into prompts for absent optional fields.
pub const FALLBACK_TEXT: &str = "Not specified";

const SWOT_MAX_TOKENS: u32 = 1500;
const SWOT_TEMPERATURE: f64 = 0.4;
const MESSAGING_MAX_TOKENS: u32 = 3000;
const MESSAGING_TEMPERATURE: f64 = 0.8;

/// System instruction for SWOT analysis.
pub const SWOT_SYSTEM_PROMPT: &str = "You are a senior business strategy consultant who \
produces rigorous, specific SWOT analyses. You always respond with valid JSON only, \
never with explanations, markdown, or surrounding prose.";

/// System instruction for messaging-framework generation.
pub const MESSAGING_SYSTEM_PROMPT: &str = "You are an expert product marketing strategist \
who crafts complete messaging frameworks. You always respond with valid JSON only, \
never with explanations, markdown, or surrounding prose.";

/// Synthesize the SWOT prompt from a validated request.
pub fn swot_prompt(request: &SwotRequest) -> PromptSpec {
    let industry = request.industry.as_deref().unwrap_or(FALLBACK_TEXT);
    let additional_context = request
        .additional_context
        .as_deref()
        .unwrap_or(FALLBACK_TEXT);

    let user = format!(
        r#"Perform a SWOT analysis for the following business.

Company: {company}
Industry: {industry}
Additional context: {additional_context}

For each of strengths, weaknesses, opportunities, and threats, provide exactly 4 entries.
Every entry needs a short "point" headline and a 1-2 sentence "description" specific to
this company and industry - no generic filler. Then distill 3 key insights and 3
actionable recommendations.

Return a JSON object matching this exact structure:
{{
  "company": "{company}",
  "industry": "{industry}",
  "analysis": {{
    "strengths": [
      {{"point": "Concise strength headline", "description": "Why this matters for the company"}}
    ],
    "weaknesses": [
      {{"point": "Concise weakness headline", "description": "Why this matters for the company"}}
    ],
    "opportunities": [
      {{"point": "Concise opportunity headline", "description": "Why this matters for the company"}}
    ],
    "threats": [
      {{"point": "Concise threat headline", "description": "Why this matters for the company"}}
    ]
  }},
  "keyInsights": ["First insight", "Second insight", "Third insight"],
  "recommendations": ["First recommendation", "Second recommendation", "Third recommendation"]
}}

Respond with the JSON object only. Do not include any text before or after it."#,
        company = request.company,
        industry = industry,
        additional_context = additional_context,
    );

    PromptSpec {
        system: SWOT_SYSTEM_PROMPT,
        user,
        max_tokens: SWOT_MAX_TOKENS,
        temperature: SWOT_TEMPERATURE,
    }
}

/// Synthesize the messaging-framework prompt from a validated request.
pub fn messaging_prompt(request: &MessagingRequest) -> PromptSpec {
    let target_audience = request.target_audience.as_deref().unwrap_or(FALLBACK_TEXT);
    let key_features = request.key_features.as_deref().unwrap_or(FALLBACK_TEXT);
    let competitors = request.competitors.as_deref().unwrap_or(FALLBACK_TEXT);
    let business_goals = request.business_goals.as_deref().unwrap_or(FALLBACK_TEXT);
    let industry = request.industry.as_deref().unwrap_or(FALLBACK_TEXT);
    let tone_preference = request.tone_preference.as_deref().unwrap_or(FALLBACK_TEXT);

    let user = format!(
        r#"Create a complete product messaging framework for the following business.

Company: {company}
Product: {product}
Target audience: {target_audience}
Key features: {key_features}
Competitors: {competitors}
Business goals: {business_goals}
Industry: {industry}
Tone preference: {tone_preference}

Requirements:
- A sharp value proposition and a 1-2 sentence elevator pitch.
- A longer narrative description (2-3 paragraphs in one string).
- A tone of voice with exactly 4 adjectives plus a before/after copy example
  showing the tone transformation.
- Exactly 5 customer outcomes and exactly 2 customer requirements.
- Exactly 3 outcome pillars; each pillar groups 2 pain points, 3 benefits,
  3 feature details, and 1 proof point around one strategic theme.

Return a JSON object matching this exact structure:
{{
  "company": "{company}",
  "product": "{product}",
  "industry": "{industry}",
  "valueProposition": "One sentence value proposition",
  "targetAudience": {{
    "profile": "Description of the ideal customer"
  }},
  "elevatorPitch": "Short pitch",
  "longDescription": "Longer narrative description",
  "toneOfVoice": {{
    "adjectives": ["First", "Second", "Third", "Fourth"],
    "beforeExample": "Copy written without the tone",
    "afterExample": "The same copy rewritten in the tone"
  }},
  "outcomes": ["Outcome 1", "Outcome 2", "Outcome 3", "Outcome 4", "Outcome 5"],
  "customerRequirements": ["Requirement 1", "Requirement 2"],
  "outcomePillars": [
    {{
      "pillarName": "Strategic theme",
      "painPoints": ["Pain point 1", "Pain point 2"],
      "benefits": ["Benefit 1", "Benefit 2", "Benefit 3"],
      "featureDetails": ["Feature detail 1", "Feature detail 2", "Feature detail 3"],
      "proofPoint": "Evidence supporting this pillar"
    }}
  ]
}}

Respond with the JSON object only. Do not include any text before or after it."#,
        company = request.company,
        product = request.product,
        target_audience = target_audience,
        key_features = key_features,
        competitors = competitors,
        business_goals = business_goals,
        industry = industry,
        tone_preference = tone_preference,
    );

    PromptSpec {
        system: MESSAGING_SYSTEM_PROMPT,
        user,
        max_tokens: MESSAGING_MAX_TOKENS,
        temperature: MESSAGING_TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swot_request() -> SwotRequest {
        SwotRequest {
            company: "Acme Corp".to_string(),
            industry: Some("Logistics".to_string()),
            additional_context: None,
        }
    }

    fn messaging_request() -> MessagingRequest {
        MessagingRequest {
            company: "Acme Corp".to_string(),
            product: "RouteMaster".to_string(),
            target_audience: Some("fleet operators".to_string()),
            key_features: None,
            competitors: None,
            business_goals: None,
            industry: None,
            tone_preference: Some("confident".to_string()),
        }
    }

    #[test]
    fn test_swot_prompt_embeds_fields() {
        let spec = swot_prompt(&swot_request());
        assert!(spec.user.contains("Company: Acme Corp"));
        assert!(spec.user.contains("Industry: Logistics"));
    }

    #[test]
    fn test_swot_prompt_substitutes_fallback() {
        let spec = swot_prompt(&swot_request());
        assert!(spec.user.contains(&format!("Additional context: {FALLBACK_TEXT}")));
    }

    #[test]
    fn test_swot_prompt_carries_schema_example_and_json_only() {
        let spec = swot_prompt(&swot_request());
        assert!(spec.user.contains(r#""keyInsights""#));
        assert!(spec.user.contains(r#""point""#));
        assert!(spec.user.contains(r#""description""#));
        assert!(spec.user.contains("JSON object only"));
        assert!(spec.system.contains("valid JSON only"));
    }

    #[test]
    fn test_messaging_prompt_embeds_fields_and_fallbacks() {
        let spec = messaging_prompt(&messaging_request());
        assert!(spec.user.contains("Product: RouteMaster"));
        assert!(spec.user.contains("Target audience: fleet operators"));
        assert!(spec.user.contains("Tone preference: confident"));
        assert!(spec.user.contains(&format!("Competitors: {FALLBACK_TEXT}")));
        assert!(spec.user.contains(&format!("Key features: {FALLBACK_TEXT}")));
    }

    #[test]
    fn test_messaging_prompt_carries_schema_example() {
        let spec = messaging_prompt(&messaging_request());
        assert!(spec.user.contains(r#""outcomePillars""#));
        assert!(spec.user.contains(r#""pillarName""#));
        assert!(spec.user.contains(r#""toneOfVoice""#));
        assert!(spec.user.contains("JSON object only"));
    }

    #[test]
    fn test_sampling_parameters_differ_per_endpoint() {
        let swot = swot_prompt(&swot_request());
        let messaging = messaging_prompt(&messaging_request());

        // SWOT is capped tighter and runs more deterministic.
        assert!(swot.max_tokens < messaging.max_tokens);
        assert!(swot.temperature < messaging.temperature);
    }

    #[test]
    fn test_prompts_are_deterministic() {
        let a = swot_prompt(&swot_request());
        let b = swot_prompt(&swot_request());
        assert_eq!(a.user, b.user);
    }
}
