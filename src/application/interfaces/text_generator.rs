use async_trait::async_trait;

use crate::domain::{ChatMessage, DomainError, GenerationRequest};

/// Produces text from a generative language model.
///
/// Implementors own transport and vendor payload details. Failures are
/// reported with the granular [`DomainError`] kinds (timeout, connection,
/// rate limit, auth, upstream status, malformed body) for both calls.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Single-turn generation from one prompt.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError>;

    /// Multi-turn generation. `messages` are sent in order so the model can
    /// use earlier turns as context.
    async fn generate_with_context(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, DomainError>;
}
