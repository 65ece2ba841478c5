//! Structured-output decoding.
//!
//! Models sometimes wrap their JSON answer in a fenced markdown block
//! even when a response schema was supplied. Strip the fence before
//! parsing; anything still unparseable is a decode error.

use std::sync::OnceLock;

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::GenAiError;

fn fence_pattern() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("valid regex"))
}

/// Extract the JSON body from possibly-fenced model output.
pub fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    match fence_pattern().captures(trimmed) {
        Some(captures) => captures.get(1).map_or(trimmed, |m| m.as_str()),
        None => trimmed,
    }
}

/// Decode model output into `T`, tolerating a markdown code fence.
pub fn decode_structured<T: DeserializeOwned>(raw: &str) -> Result<T, GenAiError> {
    let json = strip_fences(raw);
    serde_json::from_str(json).map_err(|e| GenAiError::Decode {
        reason: e.to_string(),
    })
}
