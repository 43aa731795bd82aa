use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::application::{HistoryRepository, TextGenerator};
use crate::domain::DEFAULT_HISTORY_LIMIT;
use crate::{
    ContextualReplyUseCase, GeminiClient, GeminiConfig, GenerateJokeUseCase,
    InMemoryHistoryRepository, ManageHistoryUseCase, MockTextGenerator,
};

pub struct ContainerConfig {
    pub history_limit: usize,
    pub mock_generator: bool,
    /// Explicit Gemini settings. When `None` and `mock_generator` is off,
    /// settings are read from the environment.
    pub gemini: Option<GeminiConfig>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            mock_generator: false,
            gemini: None,
        }
    }
}

/// Owns the long-lived services and hands out use cases wired to them.
///
/// Built once at startup; a missing or placeholder API key fails here,
/// before any request is served.
pub struct Container {
    generator: Arc<dyn TextGenerator>,
    history: Arc<dyn HistoryRepository>,
    history_limit: usize,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let generator: Arc<dyn TextGenerator> = if config.mock_generator {
            debug!("Using mock text generator");
            Arc::new(MockTextGenerator::new())
        } else {
            let gemini = match config.gemini {
                Some(gemini) => gemini,
                None => GeminiConfig::from_env()?,
            };
            let client = GeminiClient::new(gemini)?;
            info!("Using Gemini endpoint {}", client.endpoint());
            Arc::new(client)
        };

        Ok(Self::with_generator(generator, config.history_limit))
    }

    /// Wire an already-built generator, e.g. a test double.
    pub fn with_generator(generator: Arc<dyn TextGenerator>, history_limit: usize) -> Self {
        let history_limit = history_limit.max(1);
        Self {
            generator,
            history: Arc::new(InMemoryHistoryRepository::new(history_limit)),
            history_limit,
        }
    }

    pub fn generate_joke_use_case(&self) -> GenerateJokeUseCase {
        GenerateJokeUseCase::new(self.generator.clone(), self.history.clone())
    }

    pub fn contextual_reply_use_case(&self) -> ContextualReplyUseCase {
        ContextualReplyUseCase::new(self.generator.clone(), self.history.clone())
    }

    pub fn history_use_case(&self) -> ManageHistoryUseCase {
        ManageHistoryUseCase::new(self.history.clone())
    }

    pub fn generator(&self) -> Arc<dyn TextGenerator> {
        self.generator.clone()
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }
}
