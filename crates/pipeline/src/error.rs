use brandkit_core::types::{AssetId, ProjectId};
use brandkit_genai::GenAiError;
use brandkit_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Project {0} not found")]
    ProjectNotFound(ProjectId),

    #[error("Asset {0} not found on project")]
    AssetNotFound(AssetId),

    /// A required prior field (analysis, palette, strategy) is missing.
    /// Raised locally before any generation call; never retried.
    #[error("Missing prerequisite: {0}")]
    MissingPrerequisite(&'static str),

    /// Generation-capability or structured-decode failure. Both
    /// propagate identically.
    #[error(transparent)]
    Generation(#[from] GenAiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The project disappeared between steps; the run stops without
    /// writing anything further.
    #[error("Project deleted while pipeline was running")]
    Halted,
}
