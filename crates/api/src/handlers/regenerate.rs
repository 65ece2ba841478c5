//! Handlers for single-asset regeneration.
//!
//! Regeneration is synchronous, unlike the initial pipeline: the client
//! is waiting to swap one image, so the handler returns the replacement
//! asset in the response body.

use axum::extract::{Path, State};
use axum::Json;
use brandkit_core::project::{Banner, Logo};
use brandkit_core::types::{AssetId, ProjectId};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/logos/{logo_id}/regenerate
pub async fn logo(
    State(state): State<AppState>,
    Path((project_id, logo_id)): Path<(ProjectId, AssetId)>,
) -> AppResult<Json<Logo>> {
    let logo = state.pipeline.regenerate_logo(project_id, logo_id).await?;
    Ok(Json(logo))
}

/// POST /api/v1/projects/{project_id}/banners/{banner_id}/regenerate
pub async fn banner(
    State(state): State<AppState>,
    Path((project_id, banner_id)): Path<(ProjectId, AssetId)>,
) -> AppResult<Json<Banner>> {
    let banner = state
        .pipeline
        .regenerate_banner(project_id, banner_id)
        .await?;
    Ok(Json(banner))
}
