use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Running learning counters for one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStats {
    pub session_id: String,
    pub attempts: u64,
    pub correct: u64,
    pub wrong: u64,
    pub weak_topics: HashSet<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl SessionStats {
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            session_id: session_id.into(),
            attempts: 0,
            correct: 0,
            wrong: 0,
            weak_topics: HashSet::new(),
            created_at: now,
            modified_at: now,
        }
    }

    /// Caller guarantees `correct <= total`.
    pub fn apply(&mut self, slide_title: &str, correct: u32, total: u32) {
        self.attempts += u64::from(total);
        self.correct += u64::from(correct);
        self.wrong += u64::from(total.saturating_sub(correct));

        if correct < total {
            self.weak_topics.insert(slide_title.to_string());
        }
        self.modified_at = Utc::now();
    }

    pub fn accuracy_percent(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        let accuracy = self.correct as f64 / self.attempts as f64 * 100.0;
        (accuracy * 100.0).round() / 100.0
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            attempts: self.attempts,
            correct: self.correct,
            wrong: self.wrong,
            accuracy_percent: self.accuracy_percent(),
            weak_topics: self.weak_topics.iter().cloned().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionSummary {
    pub attempts: u64,
    pub correct: u64,
    pub wrong: u64,
    pub accuracy_percent: f64,
    pub weak_topics: Vec<String>,
}
