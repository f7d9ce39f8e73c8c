// tests/api_tests.rs

use std::collections::HashSet;
use std::sync::Arc;

use career_advisor::config::Config;
use career_advisor::quiz::generator::QuestionGenerator;
use career_advisor::routes;
use career_advisor::state::AppState;
use career_advisor::store::attempts::InMemoryAttemptStore;
use career_advisor::store::profiles::ProfileStore;
use tempfile::TempDir;

/// Spawns the app on a random port with a scratch profile document and no
/// Gemini key (so question generation is the deterministic fallback bank).
/// Returns the base URL and the TempDir guard keeping the document alive.
async fn spawn_app() -> (String, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let config = Config {
        port: 0,
        database_path: dir.path().join("database.json"),
        gemini_api_key: None,
        cors_origin: "*".to_string(),
        rust_log: "error".to_string(),
    };

    let state = AppState {
        profiles: ProfileStore::new(config.database_path.clone()),
        attempts: Arc::new(InMemoryAttemptStore::default()),
        generator: QuestionGenerator::new(None),
        config,
    };

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (address, dir)
}

fn unique_email() -> String {
    format!("u_{}@example.com", &uuid::Uuid::new_v4().to_string()[..8])
}

fn signup_payload(email: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": "p",
        "fullName": "A",
        "class": "10th",
    })
}

#[tokio::test]
async fn unknown_route_404() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn signup_returns_user_without_password_hash() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();
    let email = unique_email();

    let response = client
        .post(&format!("{}/api/signup", address))
        .json(&signup_payload(&email))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["user"]["email"], email.as_str());
    assert!(body["user"].get("passwordHash").is_none());
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn signup_fails_validation_without_password() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/signup", address))
        .json(&serde_json::json!({
            "email": unique_email(),
            "fullName": "A",
            "class": "10th",
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn signup_then_login_roundtrips_the_email() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();
    let email = unique_email();

    let signup_body: serde_json::Value = client
        .post(&format!("{}/api/signup", address))
        .json(&signup_payload(&email))
        .send()
        .await
        .expect("Signup failed")
        .json()
        .await
        .unwrap();

    let login_body: serde_json::Value = client
        .post(&format!("{}/api/login", address))
        .json(&serde_json::json!({ "email": email, "password": "p" }))
        .send()
        .await
        .expect("Login failed")
        .json()
        .await
        .unwrap();

    assert_eq!(signup_body["user"]["email"], email.as_str());
    assert_eq!(login_body["user"]["email"], email.as_str());
    assert_eq!(login_body["ok"], true);
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();
    let email = unique_email();

    client
        .post(&format!("{}/api/signup", address))
        .json(&signup_payload(&email))
        .send()
        .await
        .expect("Signup failed");

    let response = client
        .post(&format!("{}/api/login", address))
        .json(&serde_json::json!({ "email": email, "password": "wrong" }))
        .send()
        .await
        .expect("Login failed");

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn login_without_credentials_is_400() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/login", address))
        .json(&serde_json::json!({ "email": "a@x.com" }))
        .send()
        .await
        .expect("Login failed");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn re_signup_overwrites_the_profile() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();
    let email = unique_email();

    client
        .post(&format!("{}/api/signup", address))
        .json(&signup_payload(&email))
        .send()
        .await
        .expect("Signup failed");

    let mut updated = signup_payload(&email);
    updated["fullName"] = "B".into();
    updated["class"] = "12th".into();
    client
        .post(&format!("{}/api/signup", address))
        .json(&updated)
        .send()
        .await
        .expect("Re-signup failed");

    let profile: serde_json::Value = client
        .get(&format!("{}/api/profile/{}", address, email))
        .send()
        .await
        .expect("Profile fetch failed")
        .json()
        .await
        .unwrap();

    assert_eq!(profile["user"]["fullName"], "B");
    assert_eq!(profile["user"]["class"], "12th");
}

#[tokio::test]
async fn profile_for_unknown_email_is_404() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/api/profile/nobody@example.com", address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn aptitude_questions_serve_the_fallback_bank() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();
    let email = unique_email();

    let body: serde_json::Value = client
        .post(&format!("{}/api/aptitude-questions", address))
        .json(&serde_json::json!({ "classLevel": "10th", "email": email }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    assert_eq!(body["ok"], true);

    for (section, prefix) in [("quantitative", "q"), ("logical", "l"), ("verbal", "v")] {
        let questions = body["questions"][section].as_array().unwrap();
        assert_eq!(questions.len(), 10, "section {section}");

        let ids: HashSet<&str> = questions
            .iter()
            .map(|q| q["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids.len(), 10, "duplicate ids in {section}");

        for question in questions {
            assert!(question["id"].as_str().unwrap().starts_with(prefix));
            let options = question["options"].as_array().unwrap();
            let answer_index = question["answerIndex"].as_u64().unwrap() as usize;
            assert!(answer_index < options.len());
        }
    }
}

#[tokio::test]
async fn aptitude_questions_require_an_email() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/aptitude-questions", address))
        .json(&serde_json::json!({ "classLevel": "10th" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn repeat_requests_still_get_full_sections() {
    // The fallback bank is exactly 10 per section, so a second request
    // inside the rotation window cannot avoid repeats; completeness must
    // win over avoidance.
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();
    let email = unique_email();

    for _ in 0..2 {
        let body: serde_json::Value = client
            .post(&format!("{}/api/aptitude-questions", address))
            .json(&serde_json::json!({ "classLevel": "12th", "email": email }))
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .unwrap();

        assert_eq!(body["ok"], true);
        for section in ["quantitative", "logical", "verbal"] {
            assert_eq!(body["questions"][section].as_array().unwrap().len(), 10);
        }
    }
}

#[tokio::test]
async fn reset_question_pool_works() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();
    let email = unique_email();

    client
        .post(&format!("{}/api/aptitude-questions", address))
        .json(&serde_json::json!({ "classLevel": "10th", "email": email }))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = client
        .post(&format!("{}/api/reset-question-pool", address))
        .json(&serde_json::json!({ "email": email }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .unwrap();

    assert_eq!(body["ok"], true);
    assert_eq!(body["message"], "Question pool reset successfully");
}

#[tokio::test]
async fn reset_question_pool_requires_an_email() {
    let (address, _db) = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/api/reset-question-pool", address))
        .json(&serde_json::json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
}
