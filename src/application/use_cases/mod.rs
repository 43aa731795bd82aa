mod contextual_reply;
mod generate_joke;
mod manage_history;

pub use contextual_reply::*;
pub use generate_joke::*;
pub use manage_history::*;
