//! Targeted single-asset regeneration.
//!
//! Regeneration reuses the asset's stored positive follow-up prompt
//! when one exists, so repeated regenerations drift toward "more of
//! what worked" instead of repeating the original brief. The new asset
//! gets a fresh instance id but occupies the same variation/format
//! slot; siblings are untouched.

use brandkit_core::palette::colors_for_images;
use brandkit_core::project::{Banner, Logo, MediaAnalysis, Project};
use brandkit_core::prompts;
use brandkit_core::types::{AspectRatio, AssetId, ProjectId};
use uuid::Uuid;

use crate::{BrandingPipeline, PipelineError};

impl BrandingPipeline {
    /// Regenerate one logo, replacing its slot in the project.
    ///
    /// Preconditions: the project exists and already holds a media
    /// analysis and a non-empty color palette. On any failure the
    /// project and its existing assets are left unchanged.
    pub async fn regenerate_logo(
        &self,
        project_id: ProjectId,
        logo_id: AssetId,
    ) -> Result<Logo, PipelineError> {
        let project = self
            .store
            .get(project_id)
            .await?
            .ok_or(PipelineError::ProjectNotFound(project_id))?;
        let (analysis, image_colors) = image_prerequisites(&project)?;
        let existing = project
            .logo_by_id(logo_id)
            .ok_or(PipelineError::AssetNotFound(logo_id))?;

        let prompt = existing
            .positive_prompt
            .clone()
            .unwrap_or_else(|| existing.prompt.clone());
        tracing::info!(%project_id, variation = existing.variation, "Regenerating logo");

        let payload = self.image(&prompt, AspectRatio::Square).await?;
        let ctx = continuous_context(&project, analysis, &image_colors);
        let pair = self
            .continuous_pair(prompts::logo_continuous(&ctx, &prompt))
            .await?;

        let logo = Logo {
            id: Uuid::new_v4(),
            project_id,
            variation: existing.variation,
            url: payload.to_data_uri(),
            file_key: existing.file_key.clone(),
            prompt,
            positive_prompt: Some(pair.positive),
            negative_prompt: Some(pair.negative),
        };
        self.store
            .put_logo(project_id, logo.clone())
            .await?
            .ok_or(PipelineError::Halted)?;
        Ok(logo)
    }

    /// Regenerate one banner, replacing its slot in the project.
    ///
    /// Same contract as [`regenerate_logo`](Self::regenerate_logo),
    /// plus the social-media strategy must already exist (its objective
    /// and platforms feed the continuous-prompt derivation). Uses the
    /// same aspect-ratio mapping as the original generation.
    pub async fn regenerate_banner(
        &self,
        project_id: ProjectId,
        banner_id: AssetId,
    ) -> Result<Banner, PipelineError> {
        let project = self
            .store
            .get(project_id)
            .await?
            .ok_or(PipelineError::ProjectNotFound(project_id))?;
        let (analysis, image_colors) = image_prerequisites(&project)?;
        let social = project
            .social_media_strategy
            .as_ref()
            .ok_or(PipelineError::MissingPrerequisite("social media strategy"))?;
        let existing = project
            .banner_by_id(banner_id)
            .ok_or(PipelineError::AssetNotFound(banner_id))?;

        let prompt = existing
            .positive_prompt
            .clone()
            .unwrap_or_else(|| existing.prompt.clone());
        tracing::info!(%project_id, format = existing.format.slug(), "Regenerating banner");

        let payload = self.image(&prompt, existing.format.aspect_ratio()).await?;
        let ctx = continuous_context(&project, analysis, &image_colors);
        let pair = self
            .continuous_pair(prompts::banner_continuous(
                &ctx,
                &social.primary_objective,
                &social.recommended_platforms,
                existing.format,
                &prompt,
            ))
            .await?;

        let banner = Banner {
            id: Uuid::new_v4(),
            project_id,
            format: existing.format,
            url: payload.to_data_uri(),
            file_key: existing.file_key.clone(),
            prompt,
            positive_prompt: Some(pair.positive),
            negative_prompt: Some(pair.negative),
        };
        self.store
            .put_banner(project_id, banner.clone())
            .await?
            .ok_or(PipelineError::Halted)?;
        Ok(banner)
    }
}

/// Check the shared regeneration preconditions and resolve the image
/// colors. Raised before any generation call so a precondition failure
/// performs no mutation.
fn image_prerequisites(
    project: &Project,
) -> Result<(&MediaAnalysis, Vec<String>), PipelineError> {
    let analysis = project
        .media_analysis
        .as_ref()
        .ok_or(PipelineError::MissingPrerequisite("media analysis"))?;
    let palette = project
        .color_palette
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or(PipelineError::MissingPrerequisite("color palette"))?;
    Ok((analysis, colors_for_images(palette)))
}

fn continuous_context<'a>(
    project: &'a Project,
    analysis: &'a MediaAnalysis,
    image_colors: &'a [String],
) -> prompts::ContinuousContext<'a> {
    prompts::ContinuousContext {
        name: &project.name,
        niche: &project.niche,
        description: project.description.as_deref(),
        slogan: project.slogan.as_deref(),
        audience: &analysis.target_audience,
        tone: &analysis.communication_tone,
        strengths: &analysis.strengths,
        opportunities: &analysis.opportunities,
        colors: image_colors,
    }
}
