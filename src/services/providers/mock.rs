//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider for testing.
pub struct MockTextProvider {
    response: Result<String, String>,
}

impl MockTextProvider {
    /// Provider that always succeeds with the given text.
    pub fn succeeding(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
        }
    }

    /// Provider that always fails with an API-reported error message.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(ProviderError::Api(message.clone())),
        }
    }
}
