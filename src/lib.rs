pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ContextualReplyUseCase, GenerateJokeUseCase, HistoryRepository, ManageHistoryUseCase,
    RecordedGeneration, TextGenerator,
};

pub use cli::Commands;

pub use connector::{GeminiClient, GeminiConfig, InMemoryHistoryRepository, MockTextGenerator};

pub use domain::{
    ChatMessage, ChatRole, DomainError, GenerationRequest, HistoryLog, Interaction,
    InteractionView, NewInteraction,
};
