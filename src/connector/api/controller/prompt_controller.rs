use anyhow::Result;

use crate::{GenerationRequest, TextGenerator};

use super::super::Container;

/// One-shot generation from the command line. Sends the prompt as-is and
/// does not record it.
pub struct PromptController<'a> {
    container: &'a Container,
}

impl<'a> PromptController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn prompt(
        &self,
        prompt: String,
        temperature: f32,
        max_tokens: Option<u32>,
    ) -> Result<String> {
        let mut request = GenerationRequest::new(prompt).with_temperature(temperature);
        if let Some(max) = max_tokens {
            request = request.with_max_output_tokens(max);
        }

        let text = self.container.generator().generate(&request).await?;
        Ok(text.trim_end().to_string())
    }
}
