// src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;

use career_advisor::config::Config;
use career_advisor::quiz::generator::QuestionGenerator;
use career_advisor::routes;
use career_advisor::state::AppState;
use career_advisor::store::attempts::InMemoryAttemptStore;
use career_advisor::store::profiles::ProfileStore;
use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not set; serving the static fallback question bank");
    }

    // Attempt history is process-lifetime only: a restart resets every
    // user's avoidance window.
    let state = AppState {
        profiles: ProfileStore::new(config.database_path.clone()),
        attempts: Arc::new(InMemoryAttemptStore::default()),
        generator: QuestionGenerator::new(config.gemini_api_key.clone()),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}
