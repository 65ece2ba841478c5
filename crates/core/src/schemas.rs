//! Structured-output schemas for the text-generation capability.
//!
//! The capability speaks a restricted JSON-schema dialect with
//! upper-case `type` discriminators. Every schema marks all of its
//! fields required; partial objects are decode errors.

use serde_json::{json, Value};

/// Media analysis: five named fields, all required.
pub fn media_analysis() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "targetAudience": { "type": "STRING" },
            "communicationTone": { "type": "STRING" },
            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "opportunities": { "type": "ARRAY", "items": { "type": "STRING" } },
        },
        "required": ["summary", "targetAudience", "communicationTone", "strengths", "opportunities"],
    })
}

/// Social-media strategy: five named fields, all required.
pub fn social_media_strategy() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "primaryObjective": { "type": "STRING" },
            "recommendedPlatforms": { "type": "ARRAY", "items": { "type": "STRING" } },
            "contentTypes": { "type": "ARRAY", "items": { "type": "STRING" } },
            "postingFrequency": { "type": "STRING" },
            "hashtags": { "type": "ARRAY", "items": { "type": "STRING" } },
        },
        "required": ["primaryObjective", "recommendedPlatforms", "contentTypes", "postingFrequency", "hashtags"],
    })
}

/// Paid-traffic strategy: five named fields, all required.
pub fn paid_traffic_strategy() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "adPlatforms": { "type": "ARRAY", "items": { "type": "STRING" } },
            "monthlyBudget": { "type": "STRING" },
            "targetSegment": { "type": "STRING" },
            "adTypes": { "type": "ARRAY", "items": { "type": "STRING" } },
            "keyMetrics": { "type": "ARRAY", "items": { "type": "STRING" } },
        },
        "required": ["adPlatforms", "monthlyBudget", "targetSegment", "adTypes", "keyMetrics"],
    })
}

/// Color palette: an array of exactly four hex color strings.
pub fn color_palette() -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
        "minItems": 4,
        "maxItems": 4,
    })
}

/// Continuous-generation prompt pair: exactly `positive` and `negative`.
pub fn continuous_prompts() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "positive": { "type": "STRING" },
            "negative": { "type": "STRING" },
        },
        "required": ["positive", "negative"],
    })
}

/// The decoded continuous-generation pair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContinuousPrompts {
    pub positive: String,
    pub negative: String,
}
