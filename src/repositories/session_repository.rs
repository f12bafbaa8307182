use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{errors::AppResult, models::domain::SessionStats};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Returns a snapshot of the session, never creating one.
    async fn find_by_id(&self, session_id: &str) -> AppResult<Option<SessionStats>>;

    /// Applies a scored interaction atomically, creating the session if absent.
    async fn record_attempt(
        &self,
        session_id: &str,
        slide_title: &str,
        correct: u32,
        total: u32,
    ) -> AppResult<SessionStats>;
}

/// Process-lifetime store; sessions are never evicted.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, SessionStats>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn find_by_id(&self, session_id: &str) -> AppResult<Option<SessionStats>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(session_id).cloned())
    }

    async fn record_attempt(
        &self,
        session_id: &str,
        slide_title: &str,
        correct: u32,
        total: u32,
    ) -> AppResult<SessionStats> {
        let mut sessions = self.sessions.write().await;
        let stats = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionStats::new(session_id));
        stats.apply(slide_title, correct, total);
        Ok(stats.clone())
    }
}
