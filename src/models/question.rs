// src/models/question.rs

use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// Invariant: `options[answer_index]` is the originally authored correct
/// option text. Any reordering of `options` must recompute `answer_index`
/// (see `quiz::selector::shuffle_options`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique within its section's bank (e.g. "q3", "l7", "v1").
    pub id: String,
    pub question: String,
    /// 3-5 option strings in display order.
    pub options: Vec<String>,
    #[serde(rename = "answerIndex")]
    pub answer_index: usize,
}

/// One quiz paper: the three sections, 10 questions each.
///
/// No `Default` and no serde defaults: a generated payload missing a
/// section key must fail to parse so the generator falls back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSet {
    pub quantitative: Vec<Question>,
    pub logical: Vec<Question>,
    pub verbal: Vec<Question>,
}

impl QuestionSet {
    pub fn sections(&self) -> [(&'static str, &[Question]); 3] {
        [
            ("quantitative", self.quantitative.as_slice()),
            ("logical", self.logical.as_slice()),
            ("verbal", self.verbal.as_slice()),
        ]
    }
}

/// DTO for requesting a quiz paper.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsRequest {
    #[serde(default)]
    pub class_level: Option<String>,
    #[serde(default)]
    pub email: String,
}

/// DTO for clearing a user's served-question history.
#[derive(Debug, Deserialize)]
pub struct ResetPoolRequest {
    #[serde(default)]
    pub email: String,
}
