//! Prompt templates for every generation step.
//!
//! Pure string builders: brand facts in, model-ready instruction out.
//! The analysis/strategy prompts ask for a JSON object matching the
//! fixed field sets in [`crate::schemas`]; the image prompts are visual
//! briefs with the constraints appropriate to the asset type.

use crate::project::BannerFormat;

fn listed(items: &[String], max: usize) -> String {
    items
        .iter()
        .take(max)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Step 1: media analysis brief.
pub fn media_analysis(name: &str, niche: &str, description: Option<&str>) -> String {
    format!(
        "Think like an expert on successful brands. Look at this brand:\n\n\
         Brand: {name}\n\
         Field: {niche}\n\
         What it does: {description}\n\n\
         Now give me an x-ray of it, as a JSON object, in plain terms:\n\
         - summary: The brand in two or three sentences.\n\
         - targetAudience: Who does this brand sell to? Describe the ideal person.\n\
         - communicationTone: How should the brand speak? (e.g. friendly, serious, playful).\n\
         - strengths: What is genuinely good about this brand? List 3 to 5 things.\n\
         - opportunities: What can the brand use to grow? List 3 to 5 ideas.\n\n\
         Be direct and simple, as if explaining to a friend.",
        description = description.unwrap_or("")
    )
}

/// Step 2: slogan brief. The response is plain text, not JSON.
pub fn slogan(name: &str, niche: &str, description: Option<&str>, tone: &str) -> String {
    format!(
        "You are a branding expert. Create an impactful, memorable slogan \
         (8 words maximum) for this brand:\n\n\
         Brand name: {name}\n\
         Niche: {niche}\n\
         Description: {description}\n\
         Communication tone: {tone}\n\n\
         The slogan must convey a {tone} feel and be easy to remember. \
         Return only the slogan.",
        description = description.unwrap_or("")
    )
}

/// Step 3: color palette brief. The response is a JSON array of exactly
/// four hex strings.
pub fn color_palette(name: &str, niche: &str, description: Option<&str>, tone: &str) -> String {
    format!(
        "You are a branding expert. Generate a harmonized palette of 4 colors \
         for this brand:\n\n\
         Brand name: {name}\n\
         Niche: {niche}\n\
         Description: {description}\n\
         Communication tone: {tone}\n\n\
         Return a JSON array of 4 hex color strings (including the '#'). \
         Example: [\"#RRGGBB\", \"#RRGGBB\", \"#RRGGBB\", \"#RRGGBB\"].",
        description = description.unwrap_or("")
    )
}

/// Step 4: social-media strategy brief.
pub fn social_media_strategy(
    name: &str,
    niche: &str,
    description: Option<&str>,
    audience: &str,
    tone: &str,
) -> String {
    format!(
        "Think like a social media guru. Based on this brand profile:\n\n\
         Brand: {name}\n\
         Field: {niche}\n\
         What it does: {description}\n\
         Who it sells to: {audience}\n\
         How it speaks: {tone}\n\n\
         Create an action plan for its social channels, as a JSON object, \
         fully digested:\n\
         - primaryObjective: What do we want from social media? One sentence.\n\
         - recommendedPlatforms: Where should the brand be? List 3 to 5 networks.\n\
         - contentTypes: What to post? Give 5 to 7 post ideas.\n\
         - postingFrequency: How often to post? (e.g. \"3 posts per week\").\n\
         - hashtags: Which hashtags to use? List 8 to 12 good ones.\n\n\
         Use simple words, as if advising someone who has never done marketing.",
        description = description.unwrap_or("")
    )
}

/// Step 5: paid-traffic strategy brief.
pub fn paid_traffic_strategy(
    name: &str,
    niche: &str,
    description: Option<&str>,
    audience: &str,
    tone: &str,
) -> String {
    format!(
        "Think like an online advertising specialist. Based on this brand \
         profile:\n\n\
         Brand: {name}\n\
         Field: {niche}\n\
         What it does: {description}\n\
         Who it sells to: {audience}\n\
         How it speaks: {tone}\n\n\
         Create a plan for advertising online, as a JSON object anyone can \
         understand:\n\
         - adPlatforms: Where to advertise? List 3 to 4 places.\n\
         - monthlyBudget: How much to invest per month? Give a suggested range.\n\
         - targetSegment: Who should see the ads? Describe the audience in detail.\n\
         - adTypes: What kind of ads to run? Give 4 to 6 ideas.\n\
         - keyMetrics: How do we know it is working? List 5 to 7 things to watch, \
         each explained simply without acronyms.\n\n\
         Be very clear and direct. Zero complication.",
        description = description.unwrap_or("")
    )
}

/// Visual brief for one logo variation.
///
/// Constraints are fixed for the asset type: pure icon, no text, flat
/// vector style on a white background.
pub fn logo(
    name: &str,
    niche: &str,
    style: &str,
    colors: &[String],
    tone: &str,
    reference_count: usize,
) -> String {
    let color_list = colors
        .iter()
        .map(|c| format!("{{{c}}}"))
        .collect::<Vec<_>>()
        .join(", ");
    let mut prompt = format!(
        "Professional {style} logo design for \"{name}\", a {niche} brand.\n\
         Clean, simple, and modern aesthetic.\n\
         Color palette: {color_list}.\n\
         High contrast, memorable symbol that represents {tone} tone.\n\
         Suitable for digital and print use.\n\
         Pure icon/symbol design, no text.\n\
         Flat design, vector style, white background."
    );
    if reference_count > 0 {
        prompt.push_str(&format!(
            "\nDraw inspiration from the {reference_count} supplied reference image(s)."
        ));
    }
    prompt
}

/// Visual brief for one banner format.
///
/// The aspect ratio is stated explicitly and device mockups are
/// prohibited outright; both constraints matter for ad placements.
pub fn banner(
    name: &str,
    niche: &str,
    format: BannerFormat,
    colors: &[String],
    tone: &str,
    headline: &str,
    reference_count: usize,
) -> String {
    let color_list = colors.join(", ");
    let aspect = format.aspect_ratio();
    let orientation = match format {
        BannerFormat::Square => "square",
        BannerFormat::VerticalStory | BannerFormat::VerticalFeed => "vertical",
    };
    let mut prompt = format!(
        "Create a professional and visually striking {orientation} social media \
         banner for the brand \"{name}\", which is in the {niche} sector.\n\
         The banner must have a {aspect} aspect ratio.\n\
         It must feature a dynamic and clean layout with a dark gradient \
         background using the colors: {color_list}.\n\
         The design should incorporate abstract geometric shapes and subtle \
         light effects to convey a sense of innovation.\n\
         The brand name \"{name}\" must be prominently displayed in a modern, \
         bold sans-serif font.\n\
         Include the headline text: \"{headline}\".\n\
         The overall aesthetic should be {tone}, professional, and impactful.\n\
         Important: do NOT include any phone mockups, device frames, or \
         screenshots. The design must be a standalone graphic banner suitable \
         for social media advertising."
    );
    if reference_count > 0 {
        prompt.push_str(&format!(
            "\nDraw inspiration from the {reference_count} supplied reference image(s)."
        ));
    }
    prompt
}

/// Accumulated brand context fed into the continuous-generation
/// derivation prompts.
#[derive(Debug, Clone)]
pub struct ContinuousContext<'a> {
    pub name: &'a str,
    pub niche: &'a str,
    pub description: Option<&'a str>,
    pub slogan: Option<&'a str>,
    pub audience: &'a str,
    pub tone: &'a str,
    pub strengths: &'a [String],
    pub opportunities: &'a [String],
    /// Image-prompt colors; only the first two are quoted back.
    pub colors: &'a [String],
}

impl ContinuousContext<'_> {
    fn block(&self) -> String {
        format!(
            "Brand name: {name}\n\
             Niche: {niche}\n\
             Description: {description}\n\
             Slogan: {slogan}\n\
             Target audience: {audience}\n\
             Communication tone: {tone}\n\
             Strengths: {strengths}\n\
             Opportunities: {opportunities}\n\
             Main palette colors: {colors}",
            name = self.name,
            niche = self.niche,
            description = self.description.unwrap_or(""),
            slogan = self.slogan.unwrap_or("N/A"),
            audience = self.audience,
            tone = self.tone,
            strengths = listed(self.strengths, 3),
            opportunities = listed(self.opportunities, 3),
            colors = listed(self.colors, 2),
        )
    }
}

/// Derivation prompt for a logo's positive/negative follow-up pair.
///
/// Always requests exactly a two-field `{positive, negative}` object.
pub fn logo_continuous(ctx: &ContinuousContext<'_>, original_prompt: &str) -> String {
    format!(
        "You are an expert in branding and AI image generation. Given the \
         brand analysis and the original prompt used to generate a logo, \
         create two new prompts for continuous generation:\n\n\
         ---\n\
         Brand analysis:\n{block}\n\
         ---\n\
         Original logo prompt: {original_prompt}\n\
         ---\n\n\
         Generate a JSON object with two logo image-generation prompts:\n\
         1. A 'positive' prompt: describe a logo variation that reinforces the \
         brand's strengths and opportunities while keeping the tone and \
         aesthetic — ideal for exploring more of what worked. Focus on one \
         specific aspect or a natural evolution of the current style.\n\
         2. A 'negative' prompt: describe a logo variation the brand must \
         avoid, because it contradicts the communication tone, strengths or \
         audience, or is generic, dated or inappropriate for the niche.\n\n\
         Use clear, concise language aimed at an image-generation model. \
         Keep both prompts short and focused.",
        block = ctx.block()
    )
}

/// Derivation prompt for a banner's positive/negative follow-up pair.
///
/// Adds the social-strategy objective and recommended platforms as extra
/// context on top of the shared brand block.
pub fn banner_continuous(
    ctx: &ContinuousContext<'_>,
    objective: &str,
    platforms: &[String],
    format: BannerFormat,
    original_prompt: &str,
) -> String {
    format!(
        "You are an expert in digital marketing and AI image generation. \
         Given the brand analysis, the social media strategy and the original \
         prompt used to generate a banner, create two new prompts for \
         continuous generation:\n\n\
         ---\n\
         Brand analysis and strategy:\n{block}\n\
         Primary social media objective: {objective}\n\
         Recommended social platforms: {platforms}\n\
         ---\n\
         Original banner prompt ({label}): {original_prompt}\n\
         ---\n\n\
         Generate a JSON object with two banner image-generation prompts:\n\
         1. A 'positive' prompt: describe a banner variation that reinforces \
         the primary social media objective using the brand's tone and \
         aesthetic. Focus on a fresh visual approach or a powerful message \
         for the specific platform.\n\
         2. A 'negative' prompt: describe a banner variation the brand must \
         avoid, because it conflicts with the strategy, tone or audience, or \
         is visually ineffective or confusing for the format (for example, \
         including a phone mockup).\n\n\
         Use clear, concise language aimed at an image-generation model. \
         Keep both prompts short and focused.",
        block = ctx.block(),
        platforms = listed(platforms, 2),
        label = format.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(strengths: &'a [String], colors: &'a [String]) -> ContinuousContext<'a> {
        ContinuousContext {
            name: "Acme",
            niche: "coffee",
            description: Some("artisan roastery"),
            slogan: Some("Roasted to be bold"),
            audience: "urban coffee lovers",
            tone: "warm",
            strengths,
            opportunities: strengths,
            colors,
        }
    }

    #[test]
    fn media_analysis_embeds_brand_facts() {
        let p = media_analysis("Acme", "coffee", Some("artisan roastery"));
        assert!(p.contains("Brand: Acme"));
        assert!(p.contains("Field: coffee"));
        assert!(p.contains("artisan roastery"));
        assert!(p.contains("communicationTone"));
    }

    #[test]
    fn media_analysis_tolerates_missing_description() {
        let p = media_analysis("Acme", "coffee", None);
        assert!(p.contains("What it does: \n"));
    }

    #[test]
    fn logo_prompt_has_fixed_constraints() {
        let colors = vec!["#111111".to_string(), "#222222".to_string()];
        let p = logo("Acme", "coffee", "geometric", &colors, "warm", 0);
        assert!(p.contains("geometric logo design for \"Acme\""));
        assert!(p.contains("{#111111}, {#222222}"));
        assert!(p.contains("no text"));
        assert!(p.contains("white background"));
        assert!(!p.contains("reference image"));
    }

    #[test]
    fn logo_prompt_mentions_references_when_present() {
        let colors = vec!["#111111".to_string()];
        let p = logo("Acme", "coffee", "elegant", &colors, "warm", 2);
        assert!(p.contains("2 supplied reference image(s)"));
    }

    #[test]
    fn banner_prompt_states_aspect_ratio_and_bans_mockups() {
        let colors = vec!["#111111".to_string(), "#222222".to_string()];
        let p = banner(
            "Acme",
            "coffee",
            BannerFormat::VerticalStory,
            &colors,
            "warm",
            "Bold beans, bold mornings",
            0,
        );
        assert!(p.contains("9:16 aspect ratio"));
        assert!(p.contains("vertical social media banner"));
        assert!(p.contains("Bold beans, bold mornings"));
        assert!(p.contains("do NOT include any phone mockups"));
    }

    #[test]
    fn continuous_context_truncates_lists() {
        let strengths: Vec<String> = (1..=5).map(|i| format!("strength{i}")).collect();
        let colors: Vec<String> = (1..=4).map(|i| format!("#00000{i}")).collect();
        let p = logo_continuous(&ctx(&strengths, &colors), "original prompt");
        assert!(p.contains("strength1, strength2, strength3"));
        assert!(!p.contains("strength4"));
        assert!(p.contains("#000001, #000002"));
        assert!(!p.contains("#000003"));
        assert!(p.contains("Original logo prompt: original prompt"));
    }

    #[test]
    fn banner_continuous_includes_social_context_and_format_label() {
        let strengths: Vec<String> = vec!["bold".into()];
        let colors: Vec<String> = vec!["#111111".into()];
        let platforms: Vec<String> = vec!["Instagram".into(), "TikTok".into(), "X".into()];
        let p = banner_continuous(
            &ctx(&strengths, &colors),
            "grow brand awareness",
            &platforms,
            BannerFormat::VerticalFeed,
            "original banner prompt",
        );
        assert!(p.contains("grow brand awareness"));
        assert!(p.contains("Instagram, TikTok"));
        assert!(!p.contains("X\n"));
        assert!(p.contains("4:5 (vertical feed)"));
    }
}
