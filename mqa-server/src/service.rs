//! The facade the HTTP boundary talks to.

use std::sync::Arc;

use tracing::info;

use answer_engine::{AnswerEngine, UserIndex};
use corpus::{MessageCache, MessageSource};
use llm_client::Collaborator;

/// Cache, index, and engine wired together behind owned trait objects.
///
/// Every method is infallible: upstream trouble surfaces as the fixed
/// fallback answers, never as an error to the caller.
pub struct QaService {
    cache: MessageCache<Arc<dyn MessageSource>>,
    engine: AnswerEngine<Arc<dyn Collaborator>>,
}

impl QaService {
    pub fn new(source: Arc<dyn MessageSource>, collaborator: Arc<dyn Collaborator>) -> Self {
        Self {
            cache: MessageCache::new(source),
            engine: AnswerEngine::new(collaborator),
        }
    }

    /// Answers a question from the cached corpus.
    pub async fn answer(&self, question: &str) -> String {
        let records = self.cache.get_messages().await;
        let index = UserIndex::from_records(&records);
        info!(
            users = index.user_count(),
            messages = index.message_count(),
            "Answering question"
        );
        self.engine.answer(&index, question).await
    }

    /// Records currently cached.
    pub async fn cache_size(&self) -> usize {
        self.cache.size().await
    }

    /// Whether the upstream source responds right now; bypasses the cache.
    pub async fn source_reachable(&self) -> bool {
        self.cache.source().probe().await
    }
}
