// src/handlers/quiz.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use chrono::Duration;
use serde_json::json;

use crate::{
    error::AppError,
    models::question::{QuestionsRequest, ResetPoolRequest},
    quiz::{generator::QuestionGenerator, selector},
    store::attempts::{AttemptStore, ROTATION_WINDOW_HOURS},
};

/// Builds a fresh aptitude paper for the user.
///
/// Questions served to this user within the rotation window are avoided
/// where the bank allows it; the 30 selected ids are recorded as a new
/// attempt (which also runs the global retention sweep).
pub async fn aptitude_questions(
    State(attempts): State<Arc<dyn AttemptStore>>,
    State(generator): State<QuestionGenerator>,
    Json(payload): Json<QuestionsRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.email.is_empty() {
        return Err(AppError::BadRequest("User email is required".to_string()));
    }

    let class_level = payload.class_level.as_deref().unwrap_or("other");
    tracing::info!(
        "Generating aptitude paper for {} ({} level)",
        payload.email,
        class_level
    );

    let used_ids = attempts
        .recently_used_ids(&payload.email, Duration::hours(ROTATION_WINDOW_HOURS))
        .await;

    let bank = generator.generate(class_level).await;
    let (questions, served_ids) =
        selector::select_paper(&bank, &used_ids, &mut rand::thread_rng());

    attempts
        .record(&payload.email, class_level, served_ids)
        .await;

    Ok(Json(json!({
        "ok": true,
        "questions": questions,
    })))
}

/// Clears the user's attempt history so previously served questions
/// become eligible again.
pub async fn reset_question_pool(
    State(attempts): State<Arc<dyn AttemptStore>>,
    Json(payload): Json<ResetPoolRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.email.is_empty() {
        return Err(AppError::BadRequest("User email is required".to_string()));
    }

    attempts.reset(&payload.email).await;
    tracing::info!("Question pool reset for {}", payload.email);

    Ok(Json(json!({
        "ok": true,
        "message": "Question pool reset successfully",
    })))
}
