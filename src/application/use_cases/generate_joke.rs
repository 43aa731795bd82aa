use std::sync::Arc;

use tracing::info;

use crate::application::{HistoryRepository, TextGenerator};
use crate::domain::{DomainError, GenerationRequest, Interaction, NewInteraction};

pub const JOKE_CATEGORY: &str = "joke";
const MIN_INPUT_CHARS: usize = 2;

/// Outcome of a successful generation together with the history size after
/// recording it.
#[derive(Debug, Clone)]
pub struct RecordedGeneration {
    pub interaction: Interaction,
    pub total_interactions: usize,
}

/// Turns a free-text theme into a single short joke and records it.
pub struct GenerateJokeUseCase {
    generator: Arc<dyn TextGenerator>,
    history: Arc<dyn HistoryRepository>,
}

impl GenerateJokeUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>, history: Arc<dyn HistoryRepository>) -> Self {
        Self { generator, history }
    }

    pub async fn execute(
        &self,
        user_input: &str,
        temperature: f32,
    ) -> Result<RecordedGeneration, DomainError> {
        if user_input.trim().chars().count() < MIN_INPUT_CHARS {
            return Err(DomainError::invalid_input(format!(
                "Write at least {MIN_INPUT_CHARS} characters!"
            )));
        }
        validate_temperature(temperature)?;

        let request = GenerationRequest::new(joke_prompt(user_input)).with_temperature(temperature);
        let response = self.generator.generate(&request).await?;

        let interaction = self
            .history
            .append(NewInteraction::new(user_input, response).with_category(JOKE_CATEGORY))
            .await;
        let total_interactions = self.history.count().await;

        info!(
            "Recorded joke #{} ({} in history)",
            interaction.id(),
            total_interactions
        );

        Ok(RecordedGeneration {
            interaction,
            total_interactions,
        })
    }
}

pub(crate) fn validate_temperature(temperature: f32) -> Result<(), DomainError> {
    if !(0.0..=1.0).contains(&temperature) {
        return Err(DomainError::invalid_input(
            "Temperature must be between 0.0 and 1.0.",
        ));
    }
    Ok(())
}

/// Wraps the user's theme in the fixed joke-writing instructions.
pub fn joke_prompt(theme: &str) -> String {
    format!(
        "You are now a professional JOKE generator.\n\
         \n\
         Your job:\n\
         - Always create one short, creative and funny joke.\n\
         - Do not make offensive or nonsensical jokes.\n\
         - The theme of the joke must be based on the user's request: \"{theme}\"\n\
         - Do not explain the joke and say nothing besides it.\n\
         \n\
         Now write ONE joke:\n"
    )
}
