use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "general";
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A prompt/response pair waiting to be recorded.
///
/// The history log turns it into an [`Interaction`] by assigning the next
/// sequence id and the creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInteraction {
    user_input: String,
    response: String,
    category: String,
}

impl NewInteraction {
    pub fn new(user_input: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            response: response.into(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }

    /// Blank categories fall back to [`DEFAULT_CATEGORY`].
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        if !category.trim().is_empty() {
            self.category = category;
        }
        self
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// One recorded generation. Immutable once created.
#[derive(Debug, Clone)]
pub struct Interaction {
    id: u64,
    user_input: String,
    response: String,
    created_at: DateTime<Local>,
    category: String,
}

impl Interaction {
    pub(crate) fn record(id: u64, new: NewInteraction, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            user_input: new.user_input,
            response: new.response,
            created_at,
            category: new.category,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn user_input(&self) -> &str {
        &self.user_input
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn view(&self) -> InteractionView {
        InteractionView {
            id: self.id,
            user_input: self.user_input.clone(),
            response: self.response.clone(),
            timestamp: self.created_at.format(TIMESTAMP_FORMAT).to_string(),
            category: self.category.clone(),
        }
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Interaction #{} [{}] - {}",
            self.id, self.category, self.created_at
        )
    }
}

/// Read-only projection handed to the web layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionView {
    pub id: u64,
    pub user_input: String,
    pub response: String,
    pub timestamp: String,
    pub category: String,
}
