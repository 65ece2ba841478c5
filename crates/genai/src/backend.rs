//! The request/response contract every generation provider implements.

use brandkit_core::types::AspectRatio;
use serde_json::Value;

use crate::error::GenAiError;

/// A text-generation request.
#[derive(Debug, Clone)]
pub struct TextRequest {
    /// Provider model identifier, e.g. `gemini-2.5-flash`.
    pub model: String,
    pub prompt: String,
    /// When set, the provider is asked for JSON conforming to this
    /// schema and the caller decodes the response with
    /// [`decode_structured`](crate::decode::decode_structured).
    pub response_schema: Option<Value>,
}

impl TextRequest {
    pub fn plain(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn structured(
        model: impl Into<String>,
        prompt: impl Into<String>,
        schema: Value,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

/// An image-generation request. This system always requests one image.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    /// Provider model identifier, e.g. `imagen-4.0-generate-001`.
    pub model: String,
    pub prompt: String,
    pub image_count: u32,
    pub output_mime_type: String,
    pub aspect_ratio: AspectRatio,
}

impl ImageRequest {
    /// One PNG at the given aspect ratio — the only shape this system uses.
    pub fn single_png(
        model: impl Into<String>,
        prompt: impl Into<String>,
        aspect_ratio: AspectRatio,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            image_count: 1,
            output_mime_type: "image/png".into(),
            aspect_ratio,
        }
    }
}

/// One generated image: base64 bytes plus media type.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    pub data: String,
    pub mime_type: String,
}

impl ImagePayload {
    /// Displayable/storable reference form.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// A generation provider: one text capability, one image capability.
///
/// Object-safe so the pipeline can hold `Arc<dyn GenerationBackend>`
/// and tests can script responses.
#[async_trait::async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text. Returns the raw model output; structured decoding
    /// is the caller's concern.
    async fn generate_text(&self, request: &TextRequest) -> Result<String, GenAiError>;

    /// Generate a single image.
    async fn generate_image(&self, request: &ImageRequest) -> Result<ImagePayload, GenAiError>;
}
