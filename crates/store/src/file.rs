//! JSON-document-backed project store.
//!
//! The whole collection lives in one JSON file, loaded at open and
//! rewritten after every mutation while the write lock is held. This is
//! enough durability for the poll-later access pattern; swapping in a
//! database means implementing [`ProjectStore`] over it instead.

use std::collections::HashMap;
use std::path::PathBuf;

use brandkit_core::project::{Banner, Logo, Project};
use brandkit_core::types::ProjectId;
use tokio::sync::RwLock;

use crate::{ProjectPatch, ProjectStore, StoreError};

pub struct JsonFileStore {
    path: PathBuf,
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl JsonFileStore {
    /// Open the store, hydrating from `path` if it exists.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let projects = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let all: Vec<Project> = serde_json::from_slice(&bytes)?;
                tracing::info!(path = %path.display(), count = all.len(), "Loaded project store");
                all.into_iter().map(|p| (p.id, p)).collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Starting with empty project store");
                HashMap::new()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            projects: RwLock::new(projects),
        })
    }

    /// Persist the current collection. Called with the write lock held
    /// so file writes are serialized.
    async fn flush(&self, projects: &HashMap<ProjectId, Project>) -> Result<(), StoreError> {
        let mut all: Vec<&Project> = projects.values().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        let bytes = serde_json::to_vec_pretty(&all)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProjectStore for JsonFileStore {
    async fn create(&self, project: Project) -> Result<Project, StoreError> {
        let mut projects = self.projects.write().await;
        projects.insert(project.id, project.clone());
        self.flush(&projects).await?;
        Ok(project)
    }

    async fn get(&self, id: ProjectId) -> Result<Option<Project>, StoreError> {
        let projects = self.projects.read().await;
        Ok(projects.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let projects = self.projects.read().await;
        let mut all: Vec<Project> = projects.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(
        &self,
        id: ProjectId,
        patch: ProjectPatch,
    ) -> Result<Option<Project>, StoreError> {
        let mut projects = self.projects.write().await;
        let updated = projects.get_mut(&id).map(|project| {
            patch.apply(project);
            project.clone()
        });
        if updated.is_some() {
            self.flush(&projects).await?;
        }
        Ok(updated)
    }

    async fn put_logo(&self, id: ProjectId, logo: Logo) -> Result<Option<Project>, StoreError> {
        let mut projects = self.projects.write().await;
        let updated = projects.get_mut(&id).map(|project| {
            project.logos.insert(logo.variation, logo);
            project.touch();
            project.clone()
        });
        if updated.is_some() {
            self.flush(&projects).await?;
        }
        Ok(updated)
    }

    async fn put_banner(
        &self,
        id: ProjectId,
        banner: Banner,
    ) -> Result<Option<Project>, StoreError> {
        let mut projects = self.projects.write().await;
        let updated = projects.get_mut(&id).map(|project| {
            project.banners.insert(banner.format, banner);
            project.touch();
            project.clone()
        });
        if updated.is_some() {
            self.flush(&projects).await?;
        }
        Ok(updated)
    }

    async fn delete(&self, id: ProjectId) -> Result<bool, StoreError> {
        let mut projects = self.projects.write().await;
        let removed = projects.remove(&id).is_some();
        if removed {
            self.flush(&projects).await?;
        }
        Ok(removed)
    }
}
