//! The project generation pipeline.
//!
//! [`BrandingPipeline`] drives one project from `processing` to a
//! terminal status through a fixed, ordered sequence of generation
//! steps, persisting each result as it arrives so a polling client sees
//! incremental progress. It also owns the targeted regeneration
//! operations for single logos/banners.
//!
//! The pipeline depends only on the [`ProjectStore`] and
//! [`GenerationBackend`] abstractions; it never touches a concrete
//! database or provider.

pub mod error;
mod regenerate;
mod run;

use std::sync::Arc;

use brandkit_core::project::ProjectStatus;
use brandkit_core::types::ProjectId;
use brandkit_genai::{GenerationBackend, ModelConfig};
use brandkit_store::{ProjectPatch, ProjectStore};

pub use error::PipelineError;

/// Orchestrator for branding-package generation.
pub struct BrandingPipeline {
    store: Arc<dyn ProjectStore>,
    backend: Arc<dyn GenerationBackend>,
    models: ModelConfig,
}

impl BrandingPipeline {
    pub fn new(
        store: Arc<dyn ProjectStore>,
        backend: Arc<dyn GenerationBackend>,
        models: ModelConfig,
    ) -> Self {
        Self {
            store,
            backend,
            models,
        }
    }

    pub fn store(&self) -> &Arc<dyn ProjectStore> {
        &self.store
    }

    /// Fire-and-forget execution of the full pipeline for one project.
    ///
    /// Errors never escape the task: they are logged and converted into
    /// the project's `failed` status, preserving every field already
    /// written. A pipeline halted because its project disappeared
    /// mid-run writes nothing.
    pub fn spawn(self: &Arc<Self>, project_id: ProjectId) -> tokio::task::JoinHandle<()> {
        let pipeline = Arc::clone(self);
        tokio::spawn(async move {
            match pipeline.run(project_id).await {
                Ok(()) => {}
                Err(PipelineError::Halted) => {
                    tracing::info!(%project_id, "Pipeline halted: project deleted mid-run");
                }
                Err(e) => {
                    tracing::error!(%project_id, error = %e, "Pipeline failed");
                    let patch = ProjectPatch::status(ProjectStatus::Failed);
                    if let Err(store_err) = pipeline.store.update(project_id, patch).await {
                        tracing::error!(
                            %project_id,
                            error = %store_err,
                            "Failed to record failed status"
                        );
                    }
                }
            }
        })
    }
}
