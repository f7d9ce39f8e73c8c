// src/handlers/profile.rs

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde_json::json;

use crate::{error::AppError, store::profiles::ProfileStore};

/// Fetches a profile by email. The client uses this to restore a session
/// from its stored email and treats the server copy as source of truth.
pub async fn get_profile(
    State(profiles): State<ProfileStore>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = profiles
        .find(&email)
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found.".to_string()))?;

    Ok(Json(json!({
        "ok": true,
        "user": student.sanitized(),
    })))
}
