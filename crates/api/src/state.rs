use std::sync::Arc;

use brandkit_pipeline::BrandingPipeline;
use brandkit_store::ProjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project persistence.
    pub store: Arc<dyn ProjectStore>,
    /// The generation pipeline; also owns the regeneration operations.
    pub pipeline: Arc<BrandingPipeline>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
