//! AI summary generation.
//!
//! Builds the fixed clinician-facing prompt from a gene record and drives a
//! [`TextProvider`]. Summarization never fails the request: every provider
//! error is downgraded to a fallback message in the response text.

use crate::models::GeneRecord;
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use std::sync::Arc;

/// Maximum number of characters of the NCBI summary fed into the prompt.
const SUMMARY_PROMPT_LIMIT: usize = 500;

/// Sampling parameters tuned for a short, factual summary.
const SUMMARY_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.3,
    max_output_tokens: 300,
    top_p: 0.8,
    top_k: 40,
};

#[derive(Clone)]
pub struct SummaryGenerator {
    provider: Arc<dyn TextProvider>,
}

impl SummaryGenerator {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Generate a summary for the record, or a textual fallback on failure.
    pub async fn summarize(&self, record: &GeneRecord) -> String {
        let prompt = build_prompt(record);

        match self.provider.generate(&prompt, &SUMMARY_PARAMS).await {
            Ok(text) => text,
            Err(ProviderError::Api(message)) => {
                tracing::warn!(gene = %record.symbol, error = %message, "Model returned no candidates");
                format!("Could not generate AI summary. Error: {}", message)
            }
            Err(ProviderError::Network(message)) => {
                tracing::warn!(gene = %record.symbol, error = %message, "Model call failed");
                format!("AI summary unavailable: {}", message)
            }
        }
    }
}

fn build_prompt(record: &GeneRecord) -> String {
    format!(
        "You are a bioinformatics expert. Create a brief 3\u{2013}4 sentence summary for researchers and clinicians.\n\
         \n\
         Gene: {}\n\
         Description: {}\n\
         Details: {}\n\
         \n\
         Focus on:\n\
         1. What this gene does (functional role)\n\
         2. Any disease connections\n\
         3. Clinical significance\n\
         \n\
         Keep it concise and professional.",
        record.symbol,
        record.description,
        truncate_chars(&record.summary, SUMMARY_PROMPT_LIMIT)
    )
}

/// Truncate to at most `limit` characters without splitting a code point.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
