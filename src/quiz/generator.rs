// src/quiz/generator.rs

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use crate::models::question::QuestionSet;
use crate::quiz::bank;
use crate::quiz::selector::SECTION_SIZE;

const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

static MARKDOWN_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?").unwrap());

/// Internal upstream-failure taxonomy. Never surfaced: every variant is
/// logged and downgraded to the fallback bank.
#[derive(Debug)]
enum GenerationError {
    Upstream(reqwest::Error),
    BadStatus(StatusCode),
    MalformedResponse(&'static str),
    Parse(serde_json::Error),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Upstream(e) => write!(f, "request failed: {e}"),
            GenerationError::BadStatus(status) => write!(f, "upstream returned {status}"),
            GenerationError::MalformedResponse(what) => write!(f, "malformed response: {what}"),
            GenerationError::Parse(e) => write!(f, "invalid question JSON: {e}"),
        }
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Upstream(err)
    }
}

/// Produces a candidate question bank for a class level.
///
/// With an API key configured this is one blocking Gemini round trip (no
/// retry, no backoff); on any failure or malformed payload it returns the
/// static fallback bank, so callers never observe an upstream error.
#[derive(Clone)]
pub struct QuestionGenerator {
    client: Client,
    api_key: Option<String>,
}

impl QuestionGenerator {
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();
        Self { client, api_key }
    }

    pub async fn generate(&self, class_level: &str) -> QuestionSet {
        let Some(api_key) = &self.api_key else {
            return bank::fallback_bank();
        };

        match self.request_generated(api_key, class_level).await {
            Ok(set) => set,
            Err(err) => {
                tracing::warn!("Question generation failed, using fallback bank: {}", err);
                bank::fallback_bank()
            }
        }
    }

    async fn request_generated(
        &self,
        api_key: &str,
        class_level: &str,
    ) -> Result<QuestionSet, GenerationError> {
        let body = json!({
            "contents": [
                { "parts": [{ "text": build_prompt(class_level) }] }
            ],
            "generationConfig": {
                "temperature": 1.0,
                "topP": 0.95,
                "topK": 64,
            }
        });

        let response = self
            .client
            .post(format!("{}?key={}", GEMINI_ENDPOINT, api_key))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::BadStatus(response.status()));
        }

        let payload: Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or(GenerationError::MalformedResponse("no candidate text"))?;

        // The model sometimes wraps the JSON in markdown fences.
        let cleaned = MARKDOWN_FENCE.replace_all(text, "");
        let set: QuestionSet =
            serde_json::from_str(cleaned.trim()).map_err(GenerationError::Parse)?;

        validate(&set)?;
        Ok(set)
    }
}

/// A generated bank must be able to fill every section and every answer
/// index must point inside its option list, otherwise the selector's
/// guarantees would not hold.
fn validate(set: &QuestionSet) -> Result<(), GenerationError> {
    for (_, questions) in set.sections() {
        if questions.len() < SECTION_SIZE {
            return Err(GenerationError::MalformedResponse("short section"));
        }
        for question in questions {
            if question.options.len() < 2 || question.answer_index >= question.options.len() {
                return Err(GenerationError::MalformedResponse("invalid question"));
            }
        }
    }
    Ok(())
}

struct LevelProfile {
    level_text: &'static str,
    difficulty_guide: &'static str,
    quant_topics: &'static str,
    logical_topics: &'static str,
    verbal_topics: &'static str,
}

fn level_profile(class_level: &str) -> LevelProfile {
    match class_level {
        "10th" => LevelProfile {
            level_text: "class 10 (secondary school) student in India",
            difficulty_guide: "DIFFICULTY LEVEL: INTERMEDIATE\n\
                - Mathematics: Basic algebra, linear equations, quadratic equations (simple), geometry (triangles, circles, areas), percentages, ratio & proportion, simple interest, speed-time-distance\n\
                - Complexity: Moderate calculations, 2-3 step problems\n\
                - Avoid: Advanced trigonometry, calculus, complex word problems",
            quant_topics: "algebra (linear/quadratic equations), geometry (areas, volumes, Pythagoras), percentages, profit/loss, simple/compound interest, ratio/proportion, speed/time/distance, number systems",
            logical_topics: "number series, coding-decoding, blood relations, direction sense, rankings, analogies, syllogisms (basic), statement conclusions",
            verbal_topics: "synonyms/antonyms (moderate difficulty), sentence correction, fill in the blanks, one-word substitution, idioms & phrases, active/passive voice, direct/indirect speech",
        },
        "12th" => LevelProfile {
            level_text: "class 12 (higher secondary) student in India",
            difficulty_guide: "DIFFICULTY LEVEL: ADVANCED\n\
                - Mathematics: Advanced algebra, trigonometry, calculus basics, complex geometry, data interpretation, probability, permutation & combination, logarithms\n\
                - Complexity: Multi-step problems requiring analytical thinking, 3-4 step solutions\n\
                - Include: Application-based problems, competitive exam level questions",
            quant_topics: "trigonometry, calculus (differentiation/integration basics), complex numbers, probability, permutation & combination, matrices, logarithms, data interpretation, advanced algebra, coordinate geometry",
            logical_topics: "complex patterns, data sufficiency, logical deduction, statement & assumptions, critical reasoning, puzzles, seating arrangements, input-output, advanced syllogisms",
            verbal_topics: "advanced vocabulary, reading comprehension, para jumbles, sentence improvement, error spotting, cloze test, idioms & phrases (advanced), inference questions",
        },
        _ => LevelProfile {
            level_text: "Indian school student (general level)",
            difficulty_guide:
                "DIFFICULTY LEVEL: MODERATE - Mix of basic and intermediate questions",
            quant_topics: "basic arithmetic, algebra, geometry, percentages, profit/loss, time & work",
            logical_topics: "patterns, series, coding-decoding, basic reasoning",
            verbal_topics: "grammar, vocabulary, sentence formation",
        },
    }
}

fn build_prompt(class_level: &str) -> String {
    let profile = level_profile(class_level);
    format!(
        r#"You are an expert aptitude test generator for Indian students preparing for competitive exams and career assessments.

TARGET STUDENT: {level_text}

{difficulty_guide}

Generate three sections with EXACTLY 10 UNIQUE questions each:

SECTION 1 - QUANTITATIVE APTITUDE (10 questions)
Topics to cover: {quant_topics}
- Each question MUST test a DIFFERENT concept
- Vary question types: calculations, word problems, data interpretation
- For Class 10: Focus on CBSE/ICSE Class 10 curriculum level
- For Class 12: Include JEE/competitive exam style questions

SECTION 2 - LOGICAL REASONING (10 questions)
Topics to cover: {logical_topics}
- Each question MUST be DISTINCT and test different reasoning skills
- Include variety: patterns, verbal reasoning, analytical reasoning
- For Class 10: Basic to moderate difficulty
- For Class 12: Advanced problem-solving, similar to CAT/competitive exams

SECTION 3 - VERBAL & COMMUNICATION (10 questions)
Topics to cover: {verbal_topics}
- Each question MUST test different language skills
- Mix of grammar, vocabulary, and comprehension
- For Class 10: Based on standard English curriculum
- For Class 12: Advanced English suitable for professional communication

CRITICAL JSON FORMAT REQUIREMENTS:
{{
  "quantitative": [
    {{"id": "q1", "question": "Question text here?", "options": ["Option A", "Option B", "Option C", "Option D"], "answerIndex": 0}}
  ],
  "logical": [...],
  "verbal": [...]
}}

STRICT RULES:
✓ Return ONLY valid JSON (no markdown, no explanations, no code blocks)
✓ EXACTLY 10 questions per section (30 total)
✓ Each question ID must be unique (q1-q10, l1-l10, v1-v10)
✓ All 10 questions in EACH section must be COMPLETELY DIFFERENT
✓ 3-5 options per question
✓ answerIndex is 0-based (0 = first option, 1 = second, etc.)
✓ Use Indian context (₹ for currency, Indian names, realistic scenarios)
✓ MAXIMUM RANDOMIZATION - Generate completely new questions every time
✓ NO REPETITION of questions or concepts within the same section

DIFFICULTY CALIBRATION:
- Class 10: Questions should be challenging but solvable with Class 10 knowledge
- Class 12: Questions should prepare students for competitive exams (JEE, NEET, CAT level intro)

Generate NOW:"#,
        level_text = profile.level_text,
        difficulty_guide = profile.difficulty_guide,
        quant_topics = profile.quant_topics,
        logical_topics = profile.logical_topics,
        verbal_topics = profile.verbal_topics,
    )
}
