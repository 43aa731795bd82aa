use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::TextGenerator;
use crate::domain::{ChatMessage, DomainError, GenerationRequest};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MODELS_PATH: &str = "/v1beta/models";
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
/// Values shipped in sample `.env` files that must never reach the API.
const PLACEHOLDER_KEYS: &[&str] = &["your_api_key_here", "sua_api_key_aqui"];
const MAX_ERROR_DETAIL: usize = 200;

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    fn new(temperature: f32, max_output_tokens: Option<u32>) -> Self {
        Self {
            temperature,
            top_k: TOP_K,
            top_p: TOP_P,
            max_output_tokens,
        }
    }
}

/// Only the fields on the path to the first text part.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from the environment:
    ///
    /// | Variable          | Default                                     |
    /// |-------------------|---------------------------------------------|
    /// | `GEMINI_API_KEY`  | required                                    |
    /// | `GEMINI_MODEL`    | `gemini-2.5-flash`                          |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
    pub fn from_env() -> Result<Self, DomainError> {
        let key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            DomainError::configuration(
                "GEMINI_API_KEY is not set. Export it or add it to your environment.",
            )
        })?;
        let mut config = Self::new(key);
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config = config.with_model(model);
        }
        if let Ok(base) = std::env::var("GEMINI_BASE_URL") {
            config = config.with_base_url(base);
        }
        Ok(config)
    }
}

/// HTTP client for the Gemini `generateContent` endpoint.
///
/// The API key travels as the `key` query parameter. Every call uses the
/// configured timeout (30 s by default) and maps failures onto the
/// [`DomainError`] taxonomy: `Timeout`, `Connection`, `RateLimited` (429),
/// `Unauthorized` (401), `Upstream` (other non-2xx) and `MalformedResponse`
/// (2xx without a first candidate text part).
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + MODELS_PATH + model + `:generateContent`).
    url: String,
}

impl GeminiClient {
    /// Fails with `Configuration` when the key is blank or a placeholder.
    pub fn new(config: GeminiConfig) -> Result<Self, DomainError> {
        validate_api_key(&config.api_key)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("failed to build HTTP client: {e}")))?;

        let url = format!(
            "{}{MODELS_PATH}/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            api_key: config.api_key.trim().to_string(),
            url,
        })
    }

    pub fn from_env() -> Result<Self, DomainError> {
        Self::new(GeminiConfig::from_env()?)
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    async fn send(&self, request: &GenerateContentRequest<'_>) -> Result<String, DomainError> {
        debug!(
            "GeminiClient: POST {} ({} content turns)",
            self.url,
            request.contents.len()
        );

        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(status_error(status, &body));
        }

        extract_text(&body)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, DomainError> {
        let payload = GenerateContentRequest {
            contents: vec![Content {
                role: None,
                parts: vec![Part {
                    text: request.prompt(),
                }],
            }],
            generation_config: GenerationConfig::new(
                request.temperature(),
                request.max_output_tokens(),
            ),
        };

        self.send(&payload).await
    }

    async fn generate_with_context(
        &self,
        messages: &[ChatMessage],
        temperature: f32,
    ) -> Result<String, DomainError> {
        let payload = GenerateContentRequest {
            contents: messages
                .iter()
                .map(|m| Content {
                    role: Some(m.role.as_str()),
                    parts: vec![Part { text: &m.text }],
                })
                .collect(),
            generation_config: GenerationConfig::new(temperature, None),
        };

        self.send(&payload).await
    }
}

fn validate_api_key(key: &str) -> Result<(), DomainError> {
    let key = key.trim();
    if key.is_empty() || PLACEHOLDER_KEYS.contains(&key) {
        return Err(DomainError::configuration(
            "Gemini API key is not configured. Set GEMINI_API_KEY to a real key.",
        ));
    }
    Ok(())
}

fn transport_error(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::Timeout
    } else {
        // The URL carries the API key.
        DomainError::connection(e.without_url().to_string())
    }
}

fn status_error(status: StatusCode, body: &str) -> DomainError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => DomainError::RateLimited,
        StatusCode::UNAUTHORIZED => DomainError::Unauthorized,
        _ => {
            let detail = serde_json::from_str::<ApiErrorBody>(body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| body.chars().take(MAX_ERROR_DETAIL).collect());
            DomainError::upstream(status.as_u16(), detail)
        }
    }
}

fn extract_text(body: &str) -> Result<String, DomainError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| DomainError::malformed(format!("response is not valid JSON: {e}")))?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| DomainError::malformed("missing candidates[0].content.parts[0].text"))
}
