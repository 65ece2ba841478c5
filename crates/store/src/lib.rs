//! Durable keyed collection of branding projects.
//!
//! The pipeline and API depend only on the [`ProjectStore`] trait;
//! which persistence mechanism backs it is a deployment choice.
//! Two implementations ship here:
//!
//! - [`MemoryStore`] — in-process map, used by tests and ephemeral runs.
//! - [`JsonFileStore`] — the same map hydrated from and written through
//!   to a JSON document, durable across restarts so clients can poll
//!   later.
//!
//! Logo/banner writes are slot-keyed store operations (`put_logo`,
//! `put_banner`) rather than whole-collection rewrites, so two
//! concurrent regenerations of different assets on the same project
//! cannot clobber each other.

pub mod file;
pub mod memory;
pub mod patch;

use brandkit_core::project::{Banner, Logo, Project};
use brandkit_core::types::ProjectId;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use patch::ProjectPatch;

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Keyed CRUD over the project collection.
///
/// Every mutating operation except `create`/`delete` returns
/// `Option<Project>`: `None` means the project no longer exists, which
/// callers treat as a liveness signal (the entity may have been deleted
/// while a pipeline was still running).
#[async_trait::async_trait]
pub trait ProjectStore: Send + Sync {
    /// Insert a new project.
    async fn create(&self, project: Project) -> Result<Project, StoreError>;

    /// Fetch a project by id.
    async fn get(&self, id: ProjectId) -> Result<Option<Project>, StoreError>;

    /// All projects, most recently created first.
    async fn list(&self) -> Result<Vec<Project>, StoreError>;

    /// Apply a partial update in place. Refreshes `updated_at`.
    async fn update(&self, id: ProjectId, patch: ProjectPatch)
        -> Result<Option<Project>, StoreError>;

    /// Insert or replace the logo occupying `logo.variation`'s slot.
    /// Refreshes `updated_at`.
    async fn put_logo(&self, id: ProjectId, logo: Logo) -> Result<Option<Project>, StoreError>;

    /// Insert or replace the banner occupying `banner.format`'s slot.
    /// Refreshes `updated_at`.
    async fn put_banner(&self, id: ProjectId, banner: Banner)
        -> Result<Option<Project>, StoreError>;

    /// Remove a project. Returns `true` if a project was removed.
    async fn delete(&self, id: ProjectId) -> Result<bool, StoreError>;
}
