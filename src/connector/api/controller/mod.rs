pub mod prompt_controller;

pub use prompt_controller::PromptController;
