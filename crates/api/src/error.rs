use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use brandkit_core::error::CoreError;
use brandkit_pipeline::PipelineError;
use brandkit_store::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps domain and pipeline errors and implements [`IntoResponse`] to
/// produce consistent JSON error responses (`{"error": ..., "code": ...}`).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `brandkit_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A pipeline or regeneration error.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A persistence error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::MissingPrerequisite(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "PRECONDITION_FAILED",
                    msg.clone(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Pipeline errors ---
            AppError::Pipeline(err) => classify_pipeline_error(err),

            // --- Store errors ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a pipeline error into an HTTP status, error code, and message.
///
/// - Missing entities map to 404.
/// - Missing prerequisites (regeneration before the palette exists) map
///   to 422: the request was well-formed but the project cannot satisfy
///   it yet.
/// - Upstream generation failures map to 502: the fault lies with the
///   generation capability, not with this service or the client.
fn classify_pipeline_error(err: &PipelineError) -> (StatusCode, &'static str, String) {
    match err {
        PipelineError::ProjectNotFound(id) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Project with id {id} not found"),
        ),
        PipelineError::AssetNotFound(id) => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("Asset with id {id} not found"),
        ),
        PipelineError::MissingPrerequisite(what) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "PRECONDITION_FAILED",
            format!("Project is missing a required field: {what}"),
        ),
        PipelineError::Generation(gen_err) => {
            tracing::error!(error = %gen_err, "Generation capability error");
            (
                StatusCode::BAD_GATEWAY,
                "GENERATION_FAILED",
                "The generation service failed to produce a result".to_string(),
            )
        }
        // The project vanished between lookup and write.
        PipelineError::Halted => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Project no longer exists".to_string(),
        ),
        PipelineError::Store(store_err) => {
            tracing::error!(error = %store_err, "Store error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
