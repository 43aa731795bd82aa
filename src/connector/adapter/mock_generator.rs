use async_trait::async_trait;
use tracing::debug;

use crate::application::TextGenerator;
use crate::domain::{ChatMessage, DomainError, GenerationRequest};

/// Offline stand-in for [`super::GeminiClient`]. Replies are derived from the
/// input, so the same prompt always yields the same text.
pub struct MockTextGenerator {
    prefix: String,
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            prefix: "[mock]".to_string(),
        }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn reply_to(&self, text: &str) -> String {
        let first_line = text
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or_default();
        format!("{} {}", self.prefix, first_line)
    }
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
        debug!(
            "MockTextGenerator: prompt of {} chars at temperature {}",
            request.prompt().len(),
            request.temperature()
        );
        Ok(self.reply_to(request.prompt()))
    }

    async fn generate_with_context(
        &self,
        messages: &[ChatMessage],
        _temperature: f32,
    ) -> Result<String, DomainError> {
        let last = messages.last().map(|m| m.text.as_str()).unwrap_or_default();
        Ok(self.reply_to(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replies_deterministically() {
        let generator = MockTextGenerator::new();
        let request = GenerationRequest::new("\n  first line\nsecond");
        let a = generator.generate(&request).await.unwrap();
        let b = generator.generate(&request).await.unwrap();
        assert_eq!(a, "[mock] first line");
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn context_reply_uses_last_turn() {
        let generator = MockTextGenerator::with_prefix(">");
        let messages = vec![
            ChatMessage::user("hello"),
            ChatMessage::model("hi"),
            ChatMessage::user("again"),
        ];
        let reply = generator.generate_with_context(&messages, 0.2).await.unwrap();
        assert_eq!(reply, "> again");
    }
}
