//! The branding project aggregate and its derived content.
//!
//! A [`Project`] starts in `processing` and accumulates derived fields as
//! pipeline steps complete. Fields are append-only during processing: a
//! set field is never cleared, only a specific logo/banner slot may be
//! replaced later by regeneration.
//!
//! Logos and banners are held in maps keyed by their slot (variation
//! number, banner format) so that replacement is a keyed insert rather
//! than a search-and-splice over a sequence. At the JSON boundary both
//! collections serialize as ordered arrays.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{AspectRatio, AssetId, ProjectId, Timestamp};

/// Lifecycle status of a project. Terminal once `completed` or `failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Processing,
    Completed,
    Failed,
}

impl ProjectStatus {
    /// Whether the pipeline will make no further automatic transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Failed)
    }
}

/// The four fixed logo style labels, in generation order.
pub const LOGO_STYLES: [&str; 4] = ["minimalist", "geometric", "elegant", "abstract"];

/// Structured read on the brand produced by the first pipeline step.
///
/// Every later text step depends on the tone (and most on the audience)
/// discovered here, which is why this step is a hard barrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAnalysis {
    /// Two to three sentences summarizing the brand.
    pub summary: String,
    pub target_audience: String,
    pub communication_tone: String,
    /// 3-5 strengths.
    pub strengths: Vec<String>,
    /// 3-5 market opportunities.
    pub opportunities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaStrategy {
    pub primary_objective: String,
    /// 3-5 platforms.
    pub recommended_platforms: Vec<String>,
    /// 5-7 content ideas.
    pub content_types: Vec<String>,
    pub posting_frequency: String,
    /// 8-12 hashtags.
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidTrafficStrategy {
    /// 3-4 ad platforms.
    pub ad_platforms: Vec<String>,
    /// Free-text monthly budget suggestion.
    pub monthly_budget: String,
    pub target_segment: String,
    /// 4-6 ad types.
    pub ad_types: Vec<String>,
    /// 5-7 tracked metrics.
    pub key_metrics: Vec<String>,
}

/// A generated logo occupying one of the four variation slots.
///
/// Regeneration issues a new `id` but keeps the `variation`, so the
/// asset's identity within the project is stable across replacements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub id: AssetId,
    pub project_id: ProjectId,
    /// Variation slot, 1..=4. One per entry in [`LOGO_STYLES`].
    pub variation: u8,
    /// Displayable image reference (data URI).
    pub url: String,
    pub file_key: String,
    /// The prompt actually used to produce this image.
    pub prompt: String,
    /// Follow-up prompt exploring more of what worked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_prompt: Option<String>,
    /// Follow-up prompt describing what to avoid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
}

impl Logo {
    /// Storage key for a logo slot, e.g. `logos/<project>/logo_variation_2.png`.
    pub fn file_key_for(project_id: ProjectId, variation: u8) -> String {
        format!("logos/{project_id}/logo_variation_{variation}.png")
    }
}

/// The three fixed banner aspect-ratio classes, in generation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BannerFormat {
    Square,
    VerticalStory,
    VerticalFeed,
}

/// All banner formats, in the order the pipeline generates them.
pub const BANNER_FORMATS: [BannerFormat; 3] = [
    BannerFormat::Square,
    BannerFormat::VerticalStory,
    BannerFormat::VerticalFeed,
];

impl BannerFormat {
    /// Aspect-ratio token passed to the image capability.
    ///
    /// The vertical-feed class is nominally 4:5, but the capability has
    /// no native 4:5 output, so 3:4 is the documented substitute.
    pub fn aspect_ratio(&self) -> AspectRatio {
        match self {
            BannerFormat::Square => AspectRatio::Square,
            BannerFormat::VerticalStory => AspectRatio::Portrait9x16,
            BannerFormat::VerticalFeed => AspectRatio::Portrait3x4,
        }
    }

    /// Human-readable placement description used inside prompts.
    pub fn label(&self) -> &'static str {
        match self {
            BannerFormat::Square => "1:1 (square) for Instagram/Facebook/LinkedIn feed posts",
            BannerFormat::VerticalStory => "9:16 (vertical) for Stories/TikTok/Reels",
            BannerFormat::VerticalFeed => "4:5 (vertical feed) for Instagram/Pinterest feeds",
        }
    }

    /// Short identifier used in storage keys.
    pub fn slug(&self) -> &'static str {
        match self {
            BannerFormat::Square => "square",
            BannerFormat::VerticalStory => "story",
            BannerFormat::VerticalFeed => "feed",
        }
    }
}

/// A generated banner occupying one of the three format slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: AssetId,
    pub project_id: ProjectId,
    pub format: BannerFormat,
    /// Displayable image reference (data URI).
    pub url: String,
    pub file_key: String,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
}

impl Banner {
    /// Storage key for a banner slot, e.g. `banners/<project>/banner_story.png`.
    pub fn file_key_for(project_id: ProjectId, format: BannerFormat) -> String {
        format!("banners/{project_id}/banner_{}.png", format.slug())
    }
}

/// A user-supplied reference image. Read-only once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: AssetId,
    pub project_id: ProjectId,
    pub file_key: String,
    pub filename: String,
    pub mime_type: String,
    /// Base64-encoded payload suitable for passing to the image capability.
    pub data: String,
    pub created_at: Timestamp,
}

impl Reference {
    pub fn new(project_id: ProjectId, filename: String, mime_type: String, data: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            file_key: format!("references/{project_id}/{filename}"),
            filename,
            mime_type,
            data,
            created_at: Utc::now(),
        }
    }
}

/// The branding project aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub niche: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(default)]
    pub references: Vec<Reference>,

    // Derived content, populated incrementally by the pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_analysis: Option<MediaAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_palette: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media_strategy: Option<SocialMediaStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_traffic_strategy: Option<PaidTrafficStrategy>,
    /// Keyed by variation slot; serialized as an ordered array.
    #[serde(with = "logo_slots", default)]
    pub logos: BTreeMap<u8, Logo>,
    /// Keyed by format slot; serialized as an ordered array.
    #[serde(with = "banner_slots", default)]
    pub banners: BTreeMap<BannerFormat, Banner>,
}

impl Project {
    /// Create a fresh project in `processing` state with no derived
    /// content. `created_at` equals `updated_at`.
    pub fn new(name: String, niche: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name,
            niche,
            description,
            status: ProjectStatus::Processing,
            created_at: now,
            updated_at: now,
            references: Vec::new(),
            media_analysis: None,
            slogan: None,
            color_palette: None,
            social_media_strategy: None,
            paid_traffic_strategy: None,
            logos: BTreeMap::new(),
            banners: BTreeMap::new(),
        }
    }

    /// Look up a logo by its instance id.
    pub fn logo_by_id(&self, logo_id: AssetId) -> Option<&Logo> {
        self.logos.values().find(|l| l.id == logo_id)
    }

    /// Look up a banner by its instance id.
    pub fn banner_by_id(&self, banner_id: AssetId) -> Option<&Banner> {
        self.banners.values().find(|b| b.id == banner_id)
    }

    /// Refresh `updated_at`. Called by the store on every mutation so a
    /// polling client can detect progress before the status changes.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Serialize the logo slot map as an array ordered by variation, and
/// rebuild the map from an array on the way back in.
mod logo_slots {
    use super::Logo;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<u8, Logo>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(map.values())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<u8, Logo>, D::Error> {
        let logos = Vec::<Logo>::deserialize(deserializer)?;
        Ok(logos.into_iter().map(|l| (l.variation, l)).collect())
    }
}

/// Same scheme for banners, keyed by format.
mod banner_slots {
    use super::{Banner, BannerFormat};
    use serde::{Deserialize, Deserializer, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<S: Serializer>(
        map: &BTreeMap<BannerFormat, Banner>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(map.values())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<BannerFormat, Banner>, D::Error> {
        let banners = Vec::<Banner>::deserialize(deserializer)?;
        Ok(banners.into_iter().map(|b| (b.format, b)).collect())
    }
}
