//! REST client for the Google Generative Language API.
//!
//! Text generation uses the `models/{model}:generateContent` endpoint;
//! image generation uses `models/{model}:predict` (Imagen). Both share
//! one pooled [`reqwest::Client`] with a per-call timeout.

use serde::Deserialize;

use crate::backend::{GenerationBackend, ImagePayload, ImageRequest, TextRequest};
use crate::config::GeminiConfig;
use crate::error::GenAiError;

/// Gemini/Imagen implementation of [`GenerationBackend`].
#[derive(Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: String,
    #[serde(rename = "mimeType", default = "default_mime")]
    mime_type: String,
}

fn default_mime() -> String {
    "image/png".into()
}

impl GeminiClient {
    /// Create a client from connection settings.
    ///
    /// Fails with [`GenAiError::MissingKey`] when no API key is set, so
    /// misconfiguration surfaces at startup rather than mid-pipeline.
    pub fn new(config: GeminiConfig) -> Result<Self, GenAiError> {
        if config.api_key.is_empty() {
            return Err(GenAiError::MissingKey);
        }
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, model: &str, verb: &str) -> String {
        format!(
            "{}/v1beta/models/{model}:{verb}",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`GenAiError::Api`] with the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, GenAiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GenAiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl GenerationBackend for GeminiClient {
    async fn generate_text(&self, request: &TextRequest) -> Result<String, GenAiError> {
        let mut body = serde_json::json!({
            "contents": [{ "parts": [{ "text": request.prompt }] }],
        });
        if let Some(schema) = &request.response_schema {
            body["generationConfig"] = serde_json::json!({
                "responseMimeType": "application/json",
                "responseSchema": schema,
            });
        }

        let response = self
            .client
            .post(self.endpoint(&request.model, "generateContent"))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: GenerateContentResponse = Self::parse_response(response).await?;
        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .filter_map(|p| p.text)
            .collect::<String>();
        if text.trim().is_empty() {
            return Err(GenAiError::EmptyResult);
        }

        tracing::debug!(model = %request.model, chars = text.len(), "Text generation succeeded");
        Ok(text)
    }

    async fn generate_image(&self, request: &ImageRequest) -> Result<ImagePayload, GenAiError> {
        let body = serde_json::json!({
            "instances": [{ "prompt": request.prompt }],
            "parameters": {
                "sampleCount": request.image_count,
                "aspectRatio": request.aspect_ratio.as_str(),
                "outputMimeType": request.output_mime_type,
            },
        });

        let response = self
            .client
            .post(self.endpoint(&request.model, "predict"))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let parsed: PredictResponse = Self::parse_response(response).await?;
        let first = parsed
            .predictions
            .into_iter()
            .next()
            .ok_or(GenAiError::EmptyResult)?;

        tracing::debug!(
            model = %request.model,
            aspect_ratio = %request.aspect_ratio,
            "Image generation succeeded"
        );
        Ok(ImagePayload {
            data: first.bytes_base64_encoded,
            mime_type: first.mime_type,
        })
    }
}
