//! CompletionGateway - sends a rendered prompt to the completion service.

use std::sync::Arc;

use crate::domain::generation::{GenerationError, RenderedPrompt, SYSTEM_INSTRUCTION};
use crate::ports::{AIProvider, CompletionRequest, MessageRole};

/// Upper bound on completion length; three short lines fit easily.
const MAX_COMPLETION_TOKENS: u32 = 400;

/// Wraps an `AIProvider` and collapses every failure into
/// `GenerationError::Failed`.
#[derive(Clone)]
pub struct CompletionGateway {
    provider: Arc<dyn AIProvider>,
}

impl CompletionGateway {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    /// Sends the system instruction and the rendered prompt, returning the
    /// top choice's raw text.
    pub async fn complete(&self, prompt: &RenderedPrompt) -> Result<String, GenerationError> {
        let request = CompletionRequest::new()
            .with_system_prompt(SYSTEM_INSTRUCTION)
            .with_message(MessageRole::User, prompt.instruction.clone())
            .with_temperature(prompt.temperature)
            .with_max_tokens(MAX_COMPLETION_TOKENS);

        let info = self.provider.provider_info();
        match self.provider.complete(request).await {
            Ok(response) => {
                tracing::debug!(
                    provider = %info.name,
                    model = %response.model,
                    total_tokens = response.usage.total_tokens,
                    "Completion received"
                );
                Ok(response.content)
            }
            Err(e) => {
                tracing::error!(
                    provider = %info.name,
                    model = %info.model,
                    error = %e,
                    "Completion failed"
                );
                Err(GenerationError::failed(e.to_string()))
            }
        }
    }
}
