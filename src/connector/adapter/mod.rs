mod gemini_client;
mod in_memory_history_repository;
mod mock_generator;

pub use gemini_client::*;
pub use in_memory_history_repository::*;
pub use mock_generator::*;
