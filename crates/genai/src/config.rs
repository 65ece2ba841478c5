use std::time::Duration;

/// Model identifiers used by the pipeline, one per capability.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Text-generation model (default: `gemini-2.5-flash`).
    pub text_model: String,
    /// Image-generation model (default: `imagen-4.0-generate-001`).
    pub image_model: String,
}

impl ModelConfig {
    /// Load model identifiers from `TEXT_MODEL` / `IMAGE_MODEL` env vars,
    /// with defaults matching the production models.
    pub fn from_env() -> Self {
        Self {
            text_model: std::env::var("TEXT_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".into()),
            image_model: std::env::var("IMAGE_MODEL")
                .unwrap_or_else(|_| "imagen-4.0-generate-001".into()),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            text_model: "gemini-2.5-flash".into(),
            image_model: "imagen-4.0-generate-001".into(),
        }
    }
}

/// Connection settings for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    /// Base URL (default: `https://generativelanguage.googleapis.com`).
    /// Overridable so tests can point at a local stub.
    pub base_url: String,
    /// Per-call timeout. A hung generation call would otherwise stall a
    /// project's pipeline indefinitely.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Default per-call timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

    /// Load from `GEMINI_API_KEY`, `GEMINI_BASE_URL` and
    /// `GEMINI_TIMEOUT_SECS` env vars.
    pub fn from_env() -> Self {
        let timeout_secs: u64 = std::env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_TIMEOUT_SECS);
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".into()),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
