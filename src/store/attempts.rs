// src/store/attempts.rs

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use crate::models::attempt::Attempt;

/// Rolling lookback used to avoid re-serving questions.
pub const ROTATION_WINDOW_HOURS: i64 = 24;

/// Horizon after which attempt records are discarded.
pub const RETENTION_DAYS: i64 = 7;

/// Store of which question ids were served to which user.
///
/// Injected behind a trait so the in-memory list can be swapped for a
/// persistent backing store without touching the selection algorithm.
/// Implementations must run the global retention sweep after every
/// `record` call, for all users.
#[async_trait]
pub trait AttemptStore: Send + Sync {
    /// Appends an attempt stamped with the current time, then sweeps
    /// records older than [`RETENTION_DAYS`].
    async fn record(&self, user_email: &str, class_level: &str, question_ids: Vec<String>);

    /// Union of question ids from the user's attempts within the window.
    async fn recently_used_ids(&self, user_email: &str, window: Duration) -> HashSet<String>;

    /// Drops all attempts older than `max_age`, for all users.
    async fn prune(&self, max_age: Duration);

    /// Removes every attempt for the given user.
    async fn reset(&self, user_email: &str);
}

/// Process-lifetime implementation: a restart loses all history and
/// resets every user's avoidance window.
#[derive(Default)]
pub struct InMemoryAttemptStore {
    attempts: Mutex<Vec<Attempt>>,
}

#[async_trait]
impl AttemptStore for InMemoryAttemptStore {
    async fn record(&self, user_email: &str, class_level: &str, question_ids: Vec<String>) {
        let mut attempts = self.attempts.lock().await;
        attempts.push(Attempt {
            user_email: user_email.to_string(),
            class_level: class_level.to_string(),
            question_ids,
            timestamp: Utc::now(),
        });

        // Global sweep after every record, not per-user.
        let cutoff = Utc::now() - Duration::days(RETENTION_DAYS);
        attempts.retain(|a| a.timestamp >= cutoff);
    }

    async fn recently_used_ids(&self, user_email: &str, window: Duration) -> HashSet<String> {
        let cutoff = Utc::now() - window;
        let attempts = self.attempts.lock().await;
        attempts
            .iter()
            .filter(|a| a.user_email == user_email && a.timestamp >= cutoff)
            .flat_map(|a| a.question_ids.iter().cloned())
            .collect()
    }

    async fn prune(&self, max_age: Duration) {
        let cutoff = Utc::now() - max_age;
        let mut attempts = self.attempts.lock().await;
        attempts.retain(|a| a.timestamp >= cutoff);
    }

    async fn reset(&self, user_email: &str) {
        let mut attempts = self.attempts.lock().await;
        attempts.retain(|a| a.user_email != user_email);
    }
}

impl InMemoryAttemptStore {
    /// Test hook: inserts an attempt with an explicit timestamp.
    #[cfg(test)]
    async fn push_at(
        &self,
        user_email: &str,
        question_ids: Vec<String>,
        timestamp: chrono::DateTime<Utc>,
    ) {
        self.attempts.lock().await.push(Attempt {
            user_email: user_email.to_string(),
            class_level: "10th".to_string(),
            question_ids,
            timestamp,
        });
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.attempts.lock().await.len()
    }
}
