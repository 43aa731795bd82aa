use std::sync::Arc;

use tracing::info;

use crate::application::use_cases::generate_joke::validate_temperature;
use crate::application::{HistoryRepository, RecordedGeneration, TextGenerator};
use crate::domain::{ChatMessage, ChatRole, DomainError, NewInteraction};

pub const CHAT_CATEGORY: &str = "chat";

/// Replies to the last user turn of a conversation, using earlier turns as
/// context, and records the exchange.
pub struct ContextualReplyUseCase {
    generator: Arc<dyn TextGenerator>,
    history: Arc<dyn HistoryRepository>,
}

impl ContextualReplyUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>, history: Arc<dyn HistoryRepository>) -> Self {
        Self { generator, history }
    }

    pub async fn execute(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<RecordedGeneration, DomainError> {
        let last = messages
            .last()
            .ok_or_else(|| DomainError::invalid_input("The conversation has no messages."))?;
        if last.role != ChatRole::User || last.text.trim().is_empty() {
            return Err(DomainError::invalid_input(
                "The conversation must end with a non-empty user message.",
            ));
        }
        validate_temperature(temperature)?;

        let response = self
            .generator
            .generate_with_context(messages, temperature)
            .await?;

        let interaction = self
            .history
            .append(NewInteraction::new(last.text.as_str(), response).with_category(CHAT_CATEGORY))
            .await;
        let total_interactions = self.history.count().await;

        info!(
            "Recorded chat reply #{} after {} turns",
            interaction.id(),
            messages.len()
        );

        Ok(RecordedGeneration {
            interaction,
            total_interactions,
        })
    }
}
