pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                                        list, create
/// /projects/{id}                                   get, delete
/// /projects/{id}/logos/{logo_id}/regenerate        regenerate one logo
/// /projects/{id}/banners/{banner_id}/regenerate    regenerate one banner
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
