use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::HistoryRepository;
use crate::domain::{HistoryLog, Interaction, InteractionView, NewInteraction};

/// Process-wide history shared by all request handlers.
///
/// Every operation takes the same mutex, so append-then-evict is a single
/// step and readers always see a consistent snapshot.
pub struct InMemoryHistoryRepository {
    log: Arc<Mutex<HistoryLog>>,
}

impl InMemoryHistoryRepository {
    pub fn new(limit: usize) -> Self {
        Self {
            log: Arc::new(Mutex::new(HistoryLog::new(limit))),
        }
    }

    pub async fn capacity(&self) -> usize {
        self.log.lock().await.capacity()
    }
}

impl Default for InMemoryHistoryRepository {
    fn default() -> Self {
        Self {
            log: Arc::new(Mutex::new(HistoryLog::default())),
        }
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, interaction: NewInteraction) -> Interaction {
        let mut log = self.log.lock().await;
        let recorded = log.append(interaction);
        debug!(
            "Appended interaction #{} ({}/{})",
            recorded.id(),
            log.count(),
            log.capacity()
        );
        recorded
    }

    async fn all(&self) -> Vec<InteractionView> {
        self.log.lock().await.all()
    }

    async fn filter_by_category(&self, category: &str) -> Vec<InteractionView> {
        self.log.lock().await.filter_by_category(category)
    }

    async fn clear(&self) {
        self.log.lock().await.clear();
    }

    async fn count(&self) -> usize {
        self.log.lock().await.count()
    }
}
