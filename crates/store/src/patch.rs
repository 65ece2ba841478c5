//! Partial project updates.

use brandkit_core::project::{
    MediaAnalysis, PaidTrafficStrategy, Project, ProjectStatus, SocialMediaStrategy,
};

/// A field-wise partial update. Only `Some` fields are applied, so a
/// set field is never cleared by a later step.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub status: Option<ProjectStatus>,
    pub media_analysis: Option<MediaAnalysis>,
    pub slogan: Option<String>,
    pub color_palette: Option<Vec<String>>,
    pub social_media_strategy: Option<SocialMediaStrategy>,
    pub paid_traffic_strategy: Option<PaidTrafficStrategy>,
}

impl ProjectPatch {
    pub fn status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Apply this patch to a project and refresh its `updated_at`.
    pub fn apply(self, project: &mut Project) {
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(analysis) = self.media_analysis {
            project.media_analysis = Some(analysis);
        }
        if let Some(slogan) = self.slogan {
            project.slogan = Some(slogan);
        }
        if let Some(palette) = self.color_palette {
            project.color_palette = Some(palette);
        }
        if let Some(strategy) = self.social_media_strategy {
            project.social_media_strategy = Some(strategy);
        }
        if let Some(strategy) = self.paid_traffic_strategy {
            project.paid_traffic_strategy = Some(strategy);
        }
        project.touch();
    }
}
