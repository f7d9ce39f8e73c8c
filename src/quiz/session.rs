// src/quiz/session.rs

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::models::question::{Question, QuestionSet};

/// Section order within a quiz.
pub const SECTION_KEYS: [&str; 3] = ["quantitative", "logical", "verbal"];

#[derive(Debug, PartialEq, Eq)]
pub enum QuizError {
    /// Starting a quiz requires a logged-in session; the caller should
    /// prompt for login.
    NotAuthenticated,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::NotAuthenticated => write!(f, "not authenticated"),
        }
    }
}

impl std::error::Error for QuizError {}

/// Per-section correct counts plus the arithmetic mean rounded to two
/// decimal places. Replaces any prior report held by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub quantitative: u32,
    pub logical: u32,
    pub verbal: u32,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Unanswered questions remain and the caller has not acknowledged;
    /// the section was not advanced.
    SectionIncomplete { unanswered: usize },
    /// Advanced to the section at this index, cursor reset to question 0.
    NextSection(usize),
    /// Last section submitted; scores computed.
    Completed(ScoreReport),
}

/// Client-side quiz state machine:
/// `InSection(section, question) -> ... -> AllComplete -> ResultsShown`.
///
/// Holds the answer map keyed `"<section>-<questionIndex>"`, rebuilt
/// fresh at every start. Single-owner, no cancellation: dropping the
/// session discards in-progress answers.
pub struct QuizSession {
    questions: QuestionSet,
    section_index: usize,
    question_index: usize,
    answers: HashMap<String, usize>,
    report: Option<ScoreReport>,
}

impl QuizSession {
    /// Begins a quiz at section 0, question 0 with an empty answer map.
    pub fn start(session_email: Option<&str>, questions: QuestionSet) -> Result<Self, QuizError> {
        if session_email.is_none() {
            return Err(QuizError::NotAuthenticated);
        }
        Ok(Self {
            questions,
            section_index: 0,
            question_index: 0,
            answers: HashMap::new(),
            report: None,
        })
    }

    pub fn section_key(&self) -> &'static str {
        SECTION_KEYS[self.section_index]
    }

    /// (section index, question index) of the cursor.
    pub fn cursor(&self) -> (usize, usize) {
        (self.section_index, self.question_index)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.section_questions().get(self.question_index)
    }

    /// Scores, present once the last section has been submitted.
    pub fn results(&self) -> Option<&ScoreReport> {
        self.report.as_ref()
    }

    fn section_questions(&self) -> &[Question] {
        match self.section_index {
            0 => &self.questions.quantitative,
            1 => &self.questions.logical,
            _ => &self.questions.verbal,
        }
    }

    /// Records the chosen option index for the question under the cursor.
    pub fn select(&mut self, option_index: usize) {
        if self.report.is_some() {
            return;
        }
        let key = format!("{}-{}", self.section_key(), self.question_index);
        self.answers.insert(key, option_index);
    }

    /// Moves forward within the current section; no-op at the last
    /// question (no wraparound).
    pub fn next(&mut self) {
        if self.report.is_none() && self.question_index + 1 < self.section_questions().len() {
            self.question_index += 1;
        }
    }

    /// Moves back within the current section; no-op at question 0.
    pub fn prev(&mut self) {
        if self.report.is_none() && self.question_index > 0 {
            self.question_index -= 1;
        }
    }

    /// Submits the current section.
    ///
    /// With unanswered questions and `acknowledged_incomplete` false the
    /// submission is refused so the caller can warn; passing true
    /// force-submits. The final section's submission computes the score
    /// report (unanswered counts as incorrect).
    pub fn submit_section(&mut self, acknowledged_incomplete: bool) -> SubmitOutcome {
        if let Some(report) = &self.report {
            return SubmitOutcome::Completed(report.clone());
        }

        let key = self.section_key();
        let unanswered = (0..self.section_questions().len())
            .filter(|i| !self.answers.contains_key(&format!("{key}-{i}")))
            .count();

        if unanswered > 0 && !acknowledged_incomplete {
            return SubmitOutcome::SectionIncomplete { unanswered };
        }

        if self.section_index + 1 < SECTION_KEYS.len() {
            self.section_index += 1;
            self.question_index = 0;
            SubmitOutcome::NextSection(self.section_index)
        } else {
            let report = self.score();
            self.report = Some(report.clone());
            SubmitOutcome::Completed(report)
        }
    }

    fn score(&self) -> ScoreReport {
        let counts: Vec<u32> = self
            .questions
            .sections()
            .iter()
            .map(|(key, questions)| {
                questions
                    .iter()
                    .enumerate()
                    .filter(|(i, q)| {
                        self.answers.get(&format!("{key}-{i}")) == Some(&q.answer_index)
                    })
                    .count() as u32
            })
            .collect();

        let average = f64::from(counts.iter().sum::<u32>()) / counts.len() as f64;
        ScoreReport {
            quantitative: counts[0],
            logical: counts[1],
            verbal: counts[2],
            average: (average * 100.0).round() / 100.0,
        }
    }
}
