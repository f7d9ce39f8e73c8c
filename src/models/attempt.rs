// src/models/attempt.rs

use chrono::{DateTime, Utc};

/// A record of which question ids were served to a user at a point in
/// time. Process-lifetime only; never persisted, so a restart resets
/// every user's avoidance window.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub user_email: String,
    pub class_level: String,
    pub question_ids: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
