//! Shared helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use brandkit_api::config::ServerConfig;
use brandkit_api::routes;
use brandkit_api::state::AppState;
use brandkit_genai::{
    GenAiError, GenerationBackend, ImagePayload, ImageRequest, ModelConfig, TextRequest,
};
use brandkit_pipeline::BrandingPipeline;
use brandkit_store::{MemoryStore, ProjectStore};

/// Canned generation backend: every step succeeds with a small fixture,
/// unless the prompt contains `fail_marker`.
pub struct StubBackend {
    pub fail_marker: Option<&'static str>,
}

impl StubBackend {
    pub fn ok() -> Self {
        Self { fail_marker: None }
    }

    pub fn failing_on(marker: &'static str) -> Self {
        Self {
            fail_marker: Some(marker),
        }
    }
}

#[async_trait::async_trait]
impl GenerationBackend for StubBackend {
    async fn generate_text(&self, request: &TextRequest) -> Result<String, GenAiError> {
        if let Some(marker) = self.fail_marker {
            if request.prompt.contains(marker) {
                return Err(GenAiError::Api {
                    status: 503,
                    body: "stubbed failure".into(),
                });
            }
        }
        let prompt = &request.prompt;
        if prompt.contains("x-ray") {
            Ok(r#"{
                "summary": "A test brand.",
                "targetAudience": "test users",
                "communicationTone": "friendly",
                "strengths": ["Quality", "Speed", "Trust"],
                "opportunities": ["Growth", "Retail", "Export"]
            }"#
            .into())
        } else if prompt.contains("Return only the slogan") {
            Ok("Test slogan".into())
        } else if prompt.contains("hex color strings") {
            Ok(r##"["#111111", "#222222", "#333333", "#444444"]"##.into())
        } else if prompt.contains("social media guru") {
            Ok(r##"{
                "primaryObjective": "awareness",
                "recommendedPlatforms": ["Instagram", "TikTok", "LinkedIn"],
                "contentTypes": ["reels", "posts", "stories", "lives", "polls"],
                "postingFrequency": "daily",
                "hashtags": ["#a", "#b", "#c", "#d", "#e", "#f", "#g", "#h"]
            }"##
            .into())
        } else if prompt.contains("advertising online") {
            Ok(r#"{
                "adPlatforms": ["Google Ads", "Meta Ads", "TikTok Ads"],
                "monthlyBudget": "1000",
                "targetSegment": "test segment",
                "adTypes": ["photo", "video", "story", "carousel"],
                "keyMetrics": ["reach", "clicks", "ctr", "cpa", "roas"]
            }"#
            .into())
        } else if prompt.contains("continuous generation") {
            Ok(r#"{"positive": "more of this", "negative": "less of that"}"#.into())
        } else {
            Err(GenAiError::EmptyResult)
        }
    }

    async fn generate_image(&self, request: &ImageRequest) -> Result<ImagePayload, GenAiError> {
        if let Some(marker) = self.fail_marker {
            if request.prompt.contains(marker) {
                return Err(GenAiError::Api {
                    status: 503,
                    body: "stubbed failure".into(),
                });
            }
        }
        Ok(ImagePayload {
            data: "QUJD".into(),
            mime_type: "image/png".into(),
        })
    }
}

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_path: None,
    }
}

/// Build the full application router with all middleware layers, backed
/// by an in-memory store and the given generation backend.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses. Returns the state too
/// so tests can inspect the store directly.
pub fn build_test_app(backend: StubBackend) -> (Router, AppState) {
    let config = test_config();
    let store: Arc<dyn ProjectStore> = Arc::new(MemoryStore::new());
    let pipeline = Arc::new(BrandingPipeline::new(
        Arc::clone(&store),
        Arc::new(backend),
        ModelConfig::default(),
    ));

    let state = AppState {
        store,
        pipeline,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state.clone());

    (app, state)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Poll `GET /api/v1/projects/{id}` until the project reaches a terminal
/// status, with a bounded number of attempts.
pub async fn await_terminal(app: &Router, id: &str) -> serde_json::Value {
    for _ in 0..200 {
        let response = get(app.clone(), &format!("/api/v1/projects/{id}")).await;
        let json = body_json(response).await;
        let status = json["status"].as_str().unwrap_or_default();
        if status == "completed" || status == "failed" {
            return json;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("project {id} never reached a terminal status");
}
