use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Upstream rate limit exceeded")]
    RateLimited,

    #[error("Upstream rejected the API key")]
    Unauthorized,

    #[error("Upstream returned HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    pub fn upstream(status: u16, msg: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: msg.into(),
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Message shown to the person who submitted the prompt.
    ///
    /// Unlike `Display` this never includes upstream bodies or transport
    /// details, only what the user can act on.
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration(_) => {
                "The service is not configured with a valid API key.".to_string()
            }
            Self::Timeout => "The API took too long to respond. Try again!".to_string(),
            Self::Connection(_) => {
                "Could not connect to the API. Check your internet connection!".to_string()
            }
            Self::RateLimited => {
                "You exceeded the API request limit. Wait a few minutes!".to_string()
            }
            Self::Unauthorized => "Invalid API key! Check that it was copied correctly.".to_string(),
            Self::Upstream { status, .. } => format!("The API returned HTTP {status}."),
            Self::MalformedResponse(_) => {
                "The API answered in an unexpected format. The model may be unavailable."
                    .to_string()
            }
            Self::InvalidInput(msg) => msg.clone(),
            Self::Internal(_) => "Unexpected error while generating a response.".to_string(),
        }
    }
}
