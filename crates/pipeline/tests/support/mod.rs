//! Scripted generation backend and fixtures shared by pipeline tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use brandkit_genai::{GenAiError, GenerationBackend, ImagePayload, ImageRequest, TextRequest};
use brandkit_pipeline::BrandingPipeline;
use brandkit_store::{MemoryStore, ProjectStore};

/// One recorded call to the backend, for asserting prompt contents and
/// aspect ratios.
#[derive(Debug, Clone)]
pub enum Call {
    Text { prompt: String },
    Image { prompt: String, aspect: String },
}

/// Answers each generation step from canned fixtures, keyed off
/// distinctive phrases in the step's prompt. A configurable failure
/// marker turns any step into a scripted API error.
pub struct MockBackend {
    pub analysis_json: String,
    pub palette_json: String,
    pub fail_marker: Option<String>,
    pub calls: Mutex<Vec<Call>>,
}

pub const ANALYSIS_JSON: &str = r#"{
    "summary": "Acme roasts single-origin beans for city dwellers.",
    "targetAudience": "urban coffee lovers aged 25-40",
    "communicationTone": "warm",
    "strengths": ["Single-origin beans", "Fast delivery", "Loyal community"],
    "opportunities": ["Subscriptions", "Wholesale", "Tasting events"]
}"#;

pub const PALETTE_JSON: &str = r##"["#102030", "#405060", "#708090", "#A0B0C0"]"##;

const SOCIAL_JSON: &str = r##"{
    "primaryObjective": "grow brand awareness",
    "recommendedPlatforms": ["Instagram", "TikTok", "LinkedIn"],
    "contentTypes": ["reels", "carousels", "testimonials", "tips", "behind the scenes"],
    "postingFrequency": "3 posts per week",
    "hashtags": ["#coffee", "#roastery", "#acme", "#espresso", "#brew", "#beans", "#caffeine", "#morning"]
}"##;

const PAID_JSON: &str = r#"{
    "adPlatforms": ["Instagram Ads", "Google Ads", "TikTok Ads"],
    "monthlyBudget": "500 to 1500 per month",
    "targetSegment": "urban professionals who buy specialty coffee online",
    "adTypes": ["photo ads", "short video", "story ads", "carousel ads"],
    "keyMetrics": ["reach", "clicks", "cost per result", "conversions", "return on ad spend"]
}"#;

const CONTINUOUS_JSON: &str =
    r#"{"positive": "explore a bolder geometric mark", "negative": "avoid generic dated marks"}"#;

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            analysis_json: ANALYSIS_JSON.into(),
            palette_json: PALETTE_JSON.into(),
            fail_marker: None,
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockBackend {
    /// Fail any call whose prompt contains `marker`.
    pub fn failing_on(marker: &str) -> Self {
        Self {
            fail_marker: Some(marker.into()),
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn image_calls(&self) -> Vec<(String, String)> {
        self.recorded()
            .into_iter()
            .filter_map(|c| match c {
                Call::Image { prompt, aspect } => Some((prompt, aspect)),
                Call::Text { .. } => None,
            })
            .collect()
    }

    fn scripted_failure(&self, prompt: &str) -> Result<(), GenAiError> {
        if let Some(marker) = &self.fail_marker {
            if prompt.contains(marker.as_str()) {
                return Err(GenAiError::Api {
                    status: 503,
                    body: "scripted failure".into(),
                });
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl GenerationBackend for MockBackend {
    async fn generate_text(&self, request: &TextRequest) -> Result<String, GenAiError> {
        self.calls.lock().unwrap().push(Call::Text {
            prompt: request.prompt.clone(),
        });
        self.scripted_failure(&request.prompt)?;

        let prompt = &request.prompt;
        if prompt.contains("x-ray") {
            Ok(self.analysis_json.clone())
        } else if prompt.contains("Return only the slogan") {
            Ok("\"Roasted to be bold\"".into())
        } else if prompt.contains("hex color strings") {
            Ok(self.palette_json.clone())
        } else if prompt.contains("social media guru") {
            Ok(SOCIAL_JSON.into())
        } else if prompt.contains("advertising online") {
            Ok(PAID_JSON.into())
        } else if prompt.contains("continuous generation") {
            Ok(CONTINUOUS_JSON.into())
        } else {
            Err(GenAiError::EmptyResult)
        }
    }

    async fn generate_image(&self, request: &ImageRequest) -> Result<ImagePayload, GenAiError> {
        self.calls.lock().unwrap().push(Call::Image {
            prompt: request.prompt.clone(),
            aspect: request.aspect_ratio.as_str().to_string(),
        });
        self.scripted_failure(&request.prompt)?;
        Ok(ImagePayload {
            data: "QUJD".into(),
            mime_type: "image/png".into(),
        })
    }
}

/// Wire a pipeline to a fresh in-memory store and the given backend.
pub fn pipeline_with(
    backend: MockBackend,
) -> (Arc<BrandingPipeline>, Arc<MemoryStore>, Arc<MockBackend>) {
    let store = Arc::new(MemoryStore::new());
    let backend = Arc::new(backend);
    let pipeline = Arc::new(BrandingPipeline::new(
        store.clone() as Arc<dyn ProjectStore>,
        backend.clone(),
        brandkit_genai::ModelConfig::default(),
    ));
    (pipeline, store, backend)
}
