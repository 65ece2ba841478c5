//! In-process project store.

use std::collections::HashMap;

use brandkit_core::project::{Banner, Logo, Project};
use brandkit_core::types::ProjectId;
use tokio::sync::RwLock;

use crate::{ProjectPatch, ProjectStore, StoreError};

/// Map-backed store with no durability. The default for tests.
#[derive(Default)]
pub struct MemoryStore {
    projects: RwLock<HashMap<ProjectId, Project>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProjectStore for MemoryStore {
    async fn create(&self, project: Project) -> Result<Project, StoreError> {
        let mut projects = self.projects.write().await;
        projects.insert(project.id, project.clone());
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
        Ok(projects.get_mut(&id).map(|project| {
            patch.apply(project);
            project.clone()
        }))
    }

    async fn put_logo(&self, id: ProjectId, logo: Logo) -> Result<Option<Project>, StoreError> {
        let mut projects = self.projects.write().await;
        Ok(projects.get_mut(&id).map(|project| {
            project.logos.insert(logo.variation, logo);
            project.touch();
            project.clone()
        }))
    }

    async fn put_banner(
        &self,
        id: ProjectId,
        banner: Banner,
    ) -> Result<Option<Project>, StoreError> {
        let mut projects = self.projects.write().await;
        Ok(projects.get_mut(&id).map(|project| {
            project.banners.insert(banner.format, banner);
            project.touch();
            project.clone()
        }))
    }

    async fn delete(&self, id: ProjectId) -> Result<bool, StoreError> {
        let mut projects = self.projects.write().await;
        Ok(projects.remove(&id).is_some())
    }
}
