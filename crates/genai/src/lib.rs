//! Generation-capability client.
//!
//! Wraps the Google Generative Language REST API behind the
//! [`GenerationBackend`] trait so the pipeline never depends on a
//! concrete provider:
//!
//! - [`GeminiClient`] — reqwest implementation (text via
//!   `:generateContent`, images via `:predict`).
//! - [`decode_structured`] — fenced-JSON-tolerant structured decoding.
//! - [`ModelConfig`] / [`GeminiConfig`] — environment-driven settings.

pub mod backend;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;

pub use backend::{GenerationBackend, ImagePayload, ImageRequest, TextRequest};
pub use client::GeminiClient;
pub use config::{GeminiConfig, ModelConfig};
pub use decode::decode_structured;
pub use error::GenAiError;
