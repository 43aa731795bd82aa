use std::sync::Arc;

use tracing::info;

use crate::application::HistoryRepository;
use crate::domain::InteractionView;

pub struct ManageHistoryUseCase {
    history: Arc<dyn HistoryRepository>,
}

impl ManageHistoryUseCase {
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    /// All entries oldest first, or only those in `category`.
    pub async fn list(&self, category: Option<&str>) -> Vec<InteractionView> {
        match category {
            Some(category) => self.history.filter_by_category(category).await,
            None => self.history.all().await,
        }
    }

    pub async fn clear(&self) {
        let removed = self.history.count().await;
        self.history.clear().await;
        info!("Cleared {} interactions from history", removed);
    }

    pub async fn count(&self) -> usize {
        self.history.count().await
    }
}
