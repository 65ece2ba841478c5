//! The ordered step sequence for one project.
//!
//! Step order matters: the media analysis discovers the communication
//! tone every later text step needs, and image steps need the finished
//! palette plus slogan/strategy context for headline text, so they run
//! last. Image generations are strictly sequential to bound load on the
//! capability and keep progress orderly for a polling client.

use brandkit_core::palette::colors_for_images;
use brandkit_core::project::{
    Banner, Logo, MediaAnalysis, PaidTrafficStrategy, Project, ProjectStatus, SocialMediaStrategy,
    BANNER_FORMATS, LOGO_STYLES,
};
use brandkit_core::types::{AspectRatio, ProjectId};
use brandkit_core::{prompts, schemas};
use brandkit_genai::{decode_structured, ImagePayload, ImageRequest, TextRequest};
use brandkit_store::ProjectPatch;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

use crate::{BrandingPipeline, PipelineError};

impl BrandingPipeline {
    /// Execute every generation step for `project_id`, persisting after
    /// each one, and mark the project `completed`.
    ///
    /// Any error aborts the remaining steps and propagates; the caller
    /// ([`spawn`](Self::spawn)) converts it into the `failed` status.
    /// Previously-written fields are never rolled back.
    pub async fn run(&self, project_id: ProjectId) -> Result<(), PipelineError> {
        let project = self
            .store
            .get(project_id)
            .await?
            .ok_or(PipelineError::ProjectNotFound(project_id))?;
        tracing::info!(%project_id, name = %project.name, "Starting generation pipeline");

        let name = project.name.clone();
        let niche = project.niche.clone();
        let description = project.description.clone();
        let reference_count = project.references.len();

        // 1. Media analysis. Hard barrier: every later step needs the tone.
        let analysis: MediaAnalysis = self
            .structured(
                prompts::media_analysis(&name, &niche, description.as_deref()),
                schemas::media_analysis(),
            )
            .await?;
        self.persist(
            project_id,
            ProjectPatch {
                media_analysis: Some(analysis.clone()),
                ..ProjectPatch::default()
            },
        )
        .await?;
        tracing::info!(%project_id, "Media analysis written");

        let tone = analysis.communication_tone.clone();

        // 2. Slogan. Models like to quote their answer; strip that.
        let raw_slogan = self
            .text(prompts::slogan(
                &name,
                &niche,
                description.as_deref(),
                &tone,
            ))
            .await?;
        let slogan = raw_slogan.replace('"', "").trim().to_string();
        self.persist(
            project_id,
            ProjectPatch {
                slogan: Some(slogan.clone()),
                ..ProjectPatch::default()
            },
        )
        .await?;
        tracing::info!(%project_id, "Slogan written");

        // 3. Color palette. Stored verbatim, even when shorter than four
        // entries; the image steps substitute a fallback without
        // overwriting this field.
        let palette: Vec<String> = self
            .structured(
                prompts::color_palette(&name, &niche, description.as_deref(), &tone),
                schemas::color_palette(),
            )
            .await?;
        self.persist(
            project_id,
            ProjectPatch {
                color_palette: Some(palette.clone()),
                ..ProjectPatch::default()
            },
        )
        .await?;
        tracing::info!(%project_id, colors = palette.len(), "Color palette written");

        // 4. Social-media strategy.
        let social: SocialMediaStrategy = self
            .structured(
                prompts::social_media_strategy(
                    &name,
                    &niche,
                    description.as_deref(),
                    &analysis.target_audience,
                    &tone,
                ),
                schemas::social_media_strategy(),
            )
            .await?;
        self.persist(
            project_id,
            ProjectPatch {
                social_media_strategy: Some(social.clone()),
                ..ProjectPatch::default()
            },
        )
        .await?;
        tracing::info!(%project_id, "Social media strategy written");

        // 5. Paid-traffic strategy.
        let paid: PaidTrafficStrategy = self
            .structured(
                prompts::paid_traffic_strategy(
                    &name,
                    &niche,
                    description.as_deref(),
                    &analysis.target_audience,
                    &tone,
                ),
                schemas::paid_traffic_strategy(),
            )
            .await?;
        self.persist(
            project_id,
            ProjectPatch {
                paid_traffic_strategy: Some(paid),
                ..ProjectPatch::default()
            },
        )
        .await?;
        tracing::info!(%project_id, "Paid traffic strategy written");

        // Re-read before the image phase: liveness check plus the hard
        // precondition that a palette exists.
        let current = self
            .store
            .get(project_id)
            .await?
            .ok_or(PipelineError::Halted)?;
        let stored_palette = current
            .color_palette
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or(PipelineError::MissingPrerequisite("color palette"))?;
        let image_colors = colors_for_images(stored_palette);

        let ctx = prompts::ContinuousContext {
            name: &name,
            niche: &niche,
            description: description.as_deref(),
            slogan: Some(&slogan),
            audience: &analysis.target_audience,
            tone: &tone,
            strengths: &analysis.strengths,
            opportunities: &analysis.opportunities,
            colors: &image_colors,
        };

        // 6. Four logos, one per style, strictly sequential.
        for (index, style) in LOGO_STYLES.iter().enumerate() {
            let variation = (index + 1) as u8;
            let prompt = prompts::logo(&name, &niche, style, &image_colors, &tone, reference_count);
            let payload = self.image(&prompt, AspectRatio::Square).await?;
            let pair = self
                .continuous_pair(prompts::logo_continuous(&ctx, &prompt))
                .await?;

            let logo = Logo {
                id: Uuid::new_v4(),
                project_id,
                variation,
                url: payload.to_data_uri(),
                file_key: Logo::file_key_for(project_id, variation),
                prompt,
                positive_prompt: Some(pair.positive),
                negative_prompt: Some(pair.negative),
            };
            self.store
                .put_logo(project_id, logo)
                .await?
                .ok_or(PipelineError::Halted)?;
            tracing::info!(%project_id, variation, style, "Logo written");
        }

        // 7. Three banners, one per format, strictly sequential.
        let headline = headline_for(&current, &social);
        for format in BANNER_FORMATS {
            let prompt = prompts::banner(
                &name,
                &niche,
                format,
                &image_colors,
                &tone,
                &headline,
                reference_count,
            );
            let payload = self.image(&prompt, format.aspect_ratio()).await?;
            let pair = self
                .continuous_pair(prompts::banner_continuous(
                    &ctx,
                    &social.primary_objective,
                    &social.recommended_platforms,
                    format,
                    &prompt,
                ))
                .await?;

            let banner = Banner {
                id: Uuid::new_v4(),
                project_id,
                format,
                url: payload.to_data_uri(),
                file_key: Banner::file_key_for(project_id, format),
                prompt,
                positive_prompt: Some(pair.positive),
                negative_prompt: Some(pair.negative),
            };
            self.store
                .put_banner(project_id, banner)
                .await?
                .ok_or(PipelineError::Halted)?;
            tracing::info!(%project_id, format = format.slug(), "Banner written");
        }

        // 8. Terminal status.
        self.persist(project_id, ProjectPatch::status(ProjectStatus::Completed))
            .await?;
        tracing::info!(%project_id, "Generation pipeline completed");
        Ok(())
    }

    // ---- shared step helpers ----

    pub(crate) async fn text(&self, prompt: String) -> Result<String, PipelineError> {
        let request = TextRequest::plain(&self.models.text_model, prompt);
        Ok(self.backend.generate_text(&request).await?)
    }

    /// Schema-constrained text generation followed by fenced-JSON-tolerant
    /// decoding. A decode failure propagates exactly like a generation
    /// failure.
    pub(crate) async fn structured<T: DeserializeOwned>(
        &self,
        prompt: String,
        schema: Value,
    ) -> Result<T, PipelineError> {
        let request = TextRequest::structured(&self.models.text_model, prompt, schema);
        let raw = self.backend.generate_text(&request).await?;
        Ok(decode_structured(&raw)?)
    }

    pub(crate) async fn image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<ImagePayload, PipelineError> {
        let request = ImageRequest::single_png(&self.models.image_model, prompt, aspect_ratio);
        Ok(self.backend.generate_image(&request).await?)
    }

    pub(crate) async fn continuous_pair(
        &self,
        prompt: String,
    ) -> Result<schemas::ContinuousPrompts, PipelineError> {
        self.structured(prompt, schemas::continuous_prompts()).await
    }

    /// Apply a patch, treating a missing project as a mid-run deletion.
    async fn persist(&self, project_id: ProjectId, patch: ProjectPatch) -> Result<(), PipelineError> {
        self.store
            .update(project_id, patch)
            .await?
            .ok_or(PipelineError::Halted)?;
        Ok(())
    }
}

/// Headline text for banner briefs: lead with the strongest claim from
/// the analysis, fall back to the social objective.
fn headline_for(project: &Project, social: &SocialMediaStrategy) -> String {
    project
        .media_analysis
        .as_ref()
        .and_then(|a| a.strengths.first().cloned())
        .unwrap_or_else(|| social.primary_objective.clone())
}
