mod support;

use assert_matches::assert_matches;
use brandkit_core::project::{BannerFormat, Project, ProjectStatus};
use brandkit_pipeline::PipelineError;
use brandkit_store::{ProjectPatch, ProjectStore};
use support::{pipeline_with, MockBackend};

async fn completed_project(
    pipeline: &brandkit_pipeline::BrandingPipeline,
    store: &dyn ProjectStore,
) -> Project {
    let project = Project::new(
        "Acme Coffee".into(),
        "specialty coffee".into(),
        Some("An artisan roastery shipping single-origin beans".into()),
    );
    let project = store.create(project).await.unwrap();
    pipeline.run(project.id).await.unwrap();
    store.get(project.id).await.unwrap().unwrap()
}

#[tokio::test]
async fn regenerating_a_logo_replaces_only_its_slot() {
    let (pipeline, store, backend) = pipeline_with(MockBackend::default());
    let before = completed_project(&pipeline, store.as_ref()).await;
    let target = before.logos[&2].clone();
    backend.calls.lock().unwrap().clear();

    let replacement = pipeline
        .regenerate_logo(before.id, target.id)
        .await
        .unwrap();

    assert_ne!(replacement.id, target.id);
    assert_eq!(replacement.variation, 2);
    assert_eq!(replacement.file_key, target.file_key);
    // The stored positive follow-up prompt drives the new image.
    assert_eq!(replacement.prompt, "explore a bolder geometric mark");
    let (image_prompt, aspect) = backend.image_calls().into_iter().next().unwrap();
    assert_eq!(image_prompt, "explore a bolder geometric mark");
    assert_eq!(aspect, "1:1");

    let after = store.get(before.id).await.unwrap().unwrap();
    assert_eq!(after.logos[&2].id, replacement.id);
    for slot in [1u8, 3, 4] {
        assert_eq!(after.logos[&slot], before.logos[&slot]);
    }
    assert_eq!(after.banners, before.banners);
}

#[tokio::test]
async fn regenerating_a_banner_keeps_its_format_and_aspect_ratio() {
    let (pipeline, store, backend) = pipeline_with(MockBackend::default());
    let before = completed_project(&pipeline, store.as_ref()).await;
    let target = before.banners[&BannerFormat::VerticalFeed].clone();
    backend.calls.lock().unwrap().clear();

    let replacement = pipeline
        .regenerate_banner(before.id, target.id)
        .await
        .unwrap();

    assert_ne!(replacement.id, target.id);
    assert_eq!(replacement.format, BannerFormat::VerticalFeed);
    let (_, aspect) = backend.image_calls().into_iter().next().unwrap();
    assert_eq!(aspect, "3:4");

    let after = store.get(before.id).await.unwrap().unwrap();
    assert_eq!(after.banners[&BannerFormat::VerticalFeed].id, replacement.id);
    assert_eq!(
        after.banners[&BannerFormat::Square],
        before.banners[&BannerFormat::Square]
    );
    assert_eq!(after.logos, before.logos);
}

#[tokio::test]
async fn logo_without_follow_up_prompt_reuses_the_original() {
    let (pipeline, store, backend) = pipeline_with(MockBackend::default());
    let before = completed_project(&pipeline, store.as_ref()).await;

    // Simulate an asset generated before follow-up prompts existed.
    let mut stripped = before.logos[&1].clone();
    stripped.positive_prompt = None;
    stripped.negative_prompt = None;
    store.put_logo(before.id, stripped.clone()).await.unwrap();
    backend.calls.lock().unwrap().clear();

    let replacement = pipeline
        .regenerate_logo(before.id, stripped.id)
        .await
        .unwrap();

    assert_eq!(replacement.prompt, stripped.prompt);
    let (image_prompt, _) = backend.image_calls().into_iter().next().unwrap();
    assert_eq!(image_prompt, stripped.prompt);
}

#[tokio::test]
async fn regeneration_without_palette_fails_before_generating() {
    let (pipeline, store, backend) = pipeline_with(MockBackend::default());
    let before = completed_project(&pipeline, store.as_ref()).await;
    let target = before.logos[&1].clone();

    // Rebuild the project without a palette but with the logo present.
    assert!(store.delete(before.id).await.unwrap());
    let mut bare = before.clone();
    bare.color_palette = None;
    store.create(bare).await.unwrap();
    backend.calls.lock().unwrap().clear();

    let err = pipeline
        .regenerate_logo(before.id, target.id)
        .await
        .unwrap_err();
    assert_matches!(err, PipelineError::MissingPrerequisite("color palette"));

    // Preconditions are checked before any generation call.
    assert!(backend.recorded().is_empty());
    let after = store.get(before.id).await.unwrap().unwrap();
    assert_eq!(after.logos[&1], before.logos[&1]);
}

#[tokio::test]
async fn banner_regeneration_requires_the_social_strategy() {
    let (pipeline, store, backend) = pipeline_with(MockBackend::default());
    let before = completed_project(&pipeline, store.as_ref()).await;
    let target = before.banners[&BannerFormat::Square].clone();

    assert!(store.delete(before.id).await.unwrap());
    let mut bare = before.clone();
    bare.social_media_strategy = None;
    store.create(bare).await.unwrap();
    backend.calls.lock().unwrap().clear();

    let err = pipeline
        .regenerate_banner(before.id, target.id)
        .await
        .unwrap_err();
    assert_matches!(err, PipelineError::MissingPrerequisite("social media strategy"));
    assert!(backend.recorded().is_empty());
}

#[tokio::test]
async fn regenerating_an_unknown_asset_reports_not_found() {
    let (pipeline, store, _backend) = pipeline_with(MockBackend::default());
    let project = completed_project(&pipeline, store.as_ref()).await;
    let ghost = uuid::Uuid::new_v4();

    let err = pipeline.regenerate_logo(project.id, ghost).await.unwrap_err();
    assert_matches!(err, PipelineError::AssetNotFound(id) if id == ghost);

    let err = pipeline
        .regenerate_banner(project.id, ghost)
        .await
        .unwrap_err();
    assert_matches!(err, PipelineError::AssetNotFound(id) if id == ghost);
}

#[tokio::test]
async fn regeneration_on_a_failed_project_still_works_when_fields_exist() {
    // A run that failed after the logos still allows regenerating them.
    let (pipeline, store, _backend) = pipeline_with(MockBackend::default());
    let before = completed_project(&pipeline, store.as_ref()).await;
    store
        .update(before.id, ProjectPatch::status(ProjectStatus::Failed))
        .await
        .unwrap();

    let target = before.logos[&3].clone();
    let replacement = pipeline
        .regenerate_logo(before.id, target.id)
        .await
        .unwrap();
    assert_eq!(replacement.variation, 3);

    let after = store.get(before.id).await.unwrap().unwrap();
    // Regeneration never touches the status.
    assert_eq!(after.status, ProjectStatus::Failed);
}
