use async_trait::async_trait;

use crate::domain::{Interaction, InteractionView, NewInteraction};

/// Shared access to the bounded interaction history.
///
/// Implementations must make `append` atomic with respect to eviction, so
/// concurrent appends never exceed the capacity or drop an entry that should
/// have been kept.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn append(&self, interaction: NewInteraction) -> Interaction;

    async fn all(&self) -> Vec<InteractionView>;

    async fn filter_by_category(&self, category: &str) -> Vec<InteractionView>;

    async fn clear(&self);

    async fn count(&self) -> usize;
}
