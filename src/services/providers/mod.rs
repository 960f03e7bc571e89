//! Text-generation provider abstraction.
//!
//! A trait seam between the summary generator and the hosted model, allowing
//! the Gemini backend to be swapped for a mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The model service answered but produced no usable candidate; carries
    /// the upstream-reported error message.
    #[error("{0}")]
    Api(String),

    /// Transport or response-parsing failure.
    #[error("{0}")]
    Network(String),
}

/// Generation parameters for model requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: i32,
    pub top_p: f32,
    pub top_k: i32,
}

/// Trait for text generation providers (e.g. Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a single text completion for the prompt.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError>;
}
