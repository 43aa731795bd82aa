use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::domain::DomainError;

/// A [`DomainError`] rendered as `{"error": <user message>}`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            DomainError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            DomainError::Connection(_)
            | DomainError::Unauthorized
            | DomainError::Upstream { .. }
            | DomainError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            DomainError::Configuration(_) | DomainError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("Request failed: {}", self.0);
        }
        (status, Json(json!({ "error": self.0.user_message() }))).into_response()
    }
}
