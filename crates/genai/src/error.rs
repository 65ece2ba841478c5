/// Errors from the generation-capability layer.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("Generation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The capability returned a non-2xx status code.
    #[error("Generation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The capability answered 2xx but produced no candidates/images.
    #[error("Generation returned an empty result set")]
    EmptyResult,

    /// The model's text output was not valid JSON for the requested schema.
    #[error("Failed to decode structured output: {reason}")]
    Decode { reason: String },

    /// No API key configured.
    #[error("Generation API key is not configured")]
    MissingKey,
}
