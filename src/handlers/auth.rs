// src/handlers/auth.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use validator::Validate;

use crate::{
    error::AppError,
    models::student::{LoginRequest, SignupRequest},
    store::profiles::ProfileStore,
    utils::hash::{hash_password, verify_password},
};

/// Creates a student profile, or fully overwrites the existing one for
/// the same email (the original "edit profile" path re-submits signup).
///
/// Hashes the password with Argon2 before storing it. The response user
/// object never carries the hash.
pub async fn signup(
    State(profiles): State<ProfileStore>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let password_hash = hash_password(&payload.password)?;
    let profile = profiles.upsert(payload.into_profile(password_hash)).await?;

    tracing::info!("Profile saved for {}", profile.email);

    Ok(Json(json!({
        "ok": true,
        "user": profile.sanitized(),
    })))
}

/// Verifies credentials against the stored hash.
///
/// Unknown email and wrong password produce the same 401 message; the
/// session is simply the email the client holds on success.
pub async fn login(
    State(profiles): State<ProfileStore>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required.".to_string(),
        ));
    }

    let student = profiles
        .find(&payload.email)
        .await?
        .ok_or_else(|| AppError::AuthError("Invalid email or password.".to_string()))?;

    if !verify_password(&payload.password, &student.password_hash)? {
        return Err(AppError::AuthError("Invalid email or password.".to_string()));
    }

    Ok(Json(json!({
        "ok": true,
        "user": student.sanitized(),
    })))
}
