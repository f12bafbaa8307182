use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::SessionSummary,
    repositories::SessionRepository,
};

/// Per-session learning analytics over an injected store.
pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn record_attempt(
        &self,
        session_id: &str,
        slide_title: &str,
        correct: u32,
        total: u32,
    ) -> AppResult<()> {
        if correct > total {
            return Err(AppError::ValidationError(format!(
                "correct ({correct}) cannot exceed total ({total})"
            )));
        }

        let stats = self
            .repository
            .record_attempt(session_id, slide_title, correct, total)
            .await?;

        log::info!(
            "Recorded {}/{} for session {} (attempts={}, accuracy={}%)",
            correct,
            total,
            session_id,
            stats.attempts,
            stats.accuracy_percent()
        );
        Ok(())
    }

    /// `None` means the session has never recorded anything.
    pub async fn get_summary(&self, session_id: &str) -> AppResult<Option<SessionSummary>> {
        let stats = self.repository.find_by_id(session_id).await?;
        Ok(stats.map(|s| s.summary()))
    }
}
