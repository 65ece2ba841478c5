//! BrandKit domain types and pure generation logic.
//!
//! This crate holds everything the rest of the workspace agrees on:
//! the [`Project`](project::Project) aggregate and its derived content,
//! the fixed generation constants (logo styles, banner formats, aspect
//! ratios, fallback palette), the prompt templates, and the
//! structured-output schemas handed to the text-generation capability.
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod palette;
pub mod project;
pub mod prompts;
pub mod schemas;
pub mod types;

pub use error::CoreError;
