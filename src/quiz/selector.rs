// src/quiz/selector.rs

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::question::{Question, QuestionSet};

/// Every quiz instance has exactly this many questions per section.
pub const SECTION_SIZE: usize = 10;

/// Uniformly permutes the option list and recomputes the correct-answer
/// index as the position of the originally-correct option text.
///
/// Duplicate option text resolves to the first match; that is a
/// data-quality bug in the bank, not handled here.
pub fn shuffle_options<R: Rng>(
    mut options: Vec<String>,
    answer_index: usize,
    rng: &mut R,
) -> (Vec<String>, usize) {
    let correct = options.get(answer_index).cloned();
    options.shuffle(rng);
    let answer_index = correct
        .and_then(|text| options.iter().position(|o| *o == text))
        .unwrap_or(0);
    (options, answer_index)
}

/// Picks [`SECTION_SIZE`] questions from a section bank, avoiding ids the
/// user saw within the rotation window.
///
/// Avoidance is best-effort: if the filter leaves fewer than
/// [`SECTION_SIZE`] candidates, the whole bank is reused rather than
/// returning a short section. Each selected question gets its options
/// reshuffled with a corrected answer index.
pub fn select_section<R: Rng>(
    bank: &[Question],
    used_ids: &HashSet<String>,
    rng: &mut R,
) -> Vec<Question> {
    let mut candidates: Vec<&Question> =
        bank.iter().filter(|q| !used_ids.contains(&q.id)).collect();

    if candidates.len() < SECTION_SIZE {
        candidates = bank.iter().collect();
    }

    candidates.shuffle(rng);
    candidates.truncate(SECTION_SIZE);

    candidates
        .into_iter()
        .map(|q| {
            let (options, answer_index) =
                shuffle_options(q.options.clone(), q.answer_index, rng);
            Question {
                id: q.id.clone(),
                question: q.question.clone(),
                options,
                answer_index,
            }
        })
        .collect()
}

/// Assembles a full paper from the three section banks and returns the
/// flat list of all served ids, in section order, for attempt recording.
pub fn select_paper<R: Rng>(
    bank: &QuestionSet,
    used_ids: &HashSet<String>,
    rng: &mut R,
) -> (QuestionSet, Vec<String>) {
    let paper = QuestionSet {
        quantitative: select_section(&bank.quantitative, used_ids, rng),
        logical: select_section(&bank.logical, used_ids, rng),
        verbal: select_section(&bank.verbal, used_ids, rng),
    };

    let served_ids = paper
        .sections()
        .iter()
        .flat_map(|(_, questions)| questions.iter().map(|q| q.id.clone()))
        .collect();

    (paper, served_ids)
}
