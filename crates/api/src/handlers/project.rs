//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use brandkit_core::error::CoreError;
use brandkit_core::project::{Project, Reference};
use brandkit_core::types::ProjectId;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for creating a project.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 120, message = "name must be 1-120 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 120, message = "niche must be 1-120 characters"))]
    pub niche: String,
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
    /// Optional reference images, base64-encoded.
    #[serde(default)]
    pub references: Vec<ReferenceUpload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceUpload {
    pub filename: String,
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

/// POST /api/v1/projects
///
/// Creates the project, kicks off the generation pipeline in the
/// background, and returns the initial `processing` snapshot
/// immediately. Clients poll `GET /projects/{id}` for progress.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let mut project = Project::new(input.name, input.niche, input.description);
    for upload in input.references {
        project.references.push(Reference::new(
            project.id,
            upload.filename,
            upload.mime_type,
            upload.data,
        ));
    }

    let project = state.store.create(project).await.map_err(AppError::Store)?;
    tracing::info!(project_id = %project.id, name = %project.name, "Project created");

    state.pipeline.spawn(project.id);

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list().await.map_err(AppError::Store)?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> AppResult<Json<Project>> {
    let project = state
        .store
        .get(id)
        .await
        .map_err(AppError::Store)?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Deleting a project whose pipeline is still running is allowed: the
/// pipeline notices the disappearance at its next write and stops.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> AppResult<StatusCode> {
    let deleted = state.store.delete(id).await.map_err(AppError::Store)?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
