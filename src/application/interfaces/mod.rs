mod history_repository;
mod text_generator;

pub use history_repository::*;
pub use text_generator::*;
