//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, regenerate};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                        -> list
/// POST   /                                        -> create
/// GET    /{id}                                    -> get_by_id
/// DELETE /{id}                                    -> delete
///
/// POST   /{id}/logos/{logo_id}/regenerate         -> regenerate::logo
/// POST   /{id}/banners/{banner_id}/regenerate     -> regenerate::banner
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id).delete(project::delete))
        .route("/{id}/logos/{logo_id}/regenerate", post(regenerate::logo))
        .route(
            "/{id}/banners/{banner_id}/regenerate",
            post(regenerate::banner),
        )
}
