use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::PromptController;

pub struct Router<'a> {
    prompt_controller: PromptController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            prompt_controller: PromptController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Generate {
                prompt,
                temperature,
                max_tokens,
            } => {
                self.prompt_controller
                    .prompt(prompt, temperature, max_tokens)
                    .await
            }
            Commands::Serve { .. } => unreachable!("serve command is handled separately in main"),
        }
    }
}
