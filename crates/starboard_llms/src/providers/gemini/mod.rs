//! Google Gemini provider module
//!
//! Implements [`ModelClient`](crate::ModelClient) over the Generative Language REST API.
//! API docs: https://ai.google.dev/api/generate-content

mod convert;
mod provider;
mod types;

pub use provider::GeminiProvider;
pub use types::{GeminiConfig, GeminiRequest, GeminiResponse};
