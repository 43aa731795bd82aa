mod generation;
mod history_log;
mod interaction;

pub use generation::*;
pub use history_log::*;
pub use interaction::*;
