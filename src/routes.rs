// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    handlers::{auth, profile, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the JSON API under `/api`.
/// * Serves the static front-end from `public/` as the fallback.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = if state.config.cors_origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    } else {
        let origin = state
            .config
            .cors_origin
            .parse::<HeaderValue>()
            .expect("CORS_ORIGIN must be a valid origin");
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([axum::http::header::CONTENT_TYPE])
    };

    let api_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/profile/{email}", get(profile::get_profile))
        .route("/aptitude-questions", post(quiz::aptitude_questions))
        .route("/reset-question-pool", post(quiz::reset_question_pool));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(ServeDir::new("public"))
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
