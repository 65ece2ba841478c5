//! Color-palette policy for image prompts.
//!
//! The pipeline stores whatever palette the model returned, but image
//! prompts always need four usable colors. When the stored palette is
//! short, a fixed fallback set is substituted for the prompt argument
//! only; the stored field is never overwritten.

/// Fixed fallback colors used when the generated palette has fewer
/// than four entries.
pub const FALLBACK_PALETTE: [&str; 4] = ["#00C6FF", "#0A0F1C", "#F5F7FA", "#9292FF"];

/// Resolve the four colors to embed in an image prompt.
///
/// Returns the first four palette entries when at least four exist,
/// otherwise the [`FALLBACK_PALETTE`].
pub fn colors_for_images(palette: &[String]) -> Vec<String> {
    if palette.len() >= 4 {
        palette[..4].to_vec()
    } else {
        FALLBACK_PALETTE.iter().map(|c| c.to_string()).collect()
    }
}
