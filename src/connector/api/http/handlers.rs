use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::connector::api::Container;
use crate::domain::{ChatMessage, InteractionView, DEFAULT_TEMPERATURE};

use super::ApiError;

pub type AppState = Arc<Container>;

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

#[derive(Debug, Deserialize)]
pub struct GenerateInput {
    pub user_input: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateOutput {
    pub user_input: String,
    pub result: String,
    pub temperature: f32,
    pub total_interactions: usize,
}

#[derive(Debug, Deserialize)]
pub struct ChatInput {
    pub messages: Vec<ChatMessage>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatOutput {
    pub result: String,
    pub total_interactions: usize,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryOutput {
    pub interactions: Vec<InteractionView>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearOutput {
    pub message: String,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthOutput {
    pub status: String,
    pub message: String,
    pub version: String,
    pub total_interactions: usize,
}

pub async fn generate(
    State(container): State<AppState>,
    Json(input): Json<GenerateInput>,
) -> Result<Json<GenerateOutput>, ApiError> {
    let recorded = container
        .generate_joke_use_case()
        .execute(&input.user_input, input.temperature)
        .await?;

    Ok(Json(GenerateOutput {
        user_input: input.user_input,
        result: recorded.interaction.response().to_string(),
        temperature: input.temperature,
        total_interactions: recorded.total_interactions,
    }))
}

pub async fn chat(
    State(container): State<AppState>,
    Json(input): Json<ChatInput>,
) -> Result<Json<ChatOutput>, ApiError> {
    let recorded = container
        .contextual_reply_use_case()
        .execute(&input.messages, input.temperature)
        .await?;

    Ok(Json(ChatOutput {
        result: recorded.interaction.response().to_string(),
        total_interactions: recorded.total_interactions,
    }))
}

pub async fn history(
    State(container): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> Json<HistoryOutput> {
    let use_case = container.history_use_case();
    let category = params.category.as_deref().filter(|c| !c.trim().is_empty());
    let interactions = use_case.list(category).await;
    let total = use_case.count().await;

    Json(HistoryOutput {
        interactions,
        total,
    })
}

pub async fn clear_history(State(container): State<AppState>) -> Json<ClearOutput> {
    container.history_use_case().clear().await;

    Json(ClearOutput {
        message: "History cleared!".to_string(),
        total: 0,
    })
}

pub async fn health(State(container): State<AppState>) -> Json<HealthOutput> {
    Json(HealthOutput {
        status: "ok".to_string(),
        message: "Service running!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_interactions: container.history_use_case().count().await,
    })
}
