//! Authentication test helpers

use axum_test::TestServer;
use sqlx::PgPool;

use stack_underflow::auth::sessions::AuthConfig;
use stack_underflow::server::create_app;

use super::database::TestDatabase;

/// Deterministic signing configuration for tests
pub fn test_auth_config() -> AuthConfig {
    AuthConfig::new("test-secret", 60)
}

/// Spin up a `TestServer` over the real router and a test pool
pub fn test_server(db: &TestDatabase) -> TestServer {
    let app = create_app(db.pool().clone(), test_auth_config());
    TestServer::new(app).expect("Failed to start test server")
}

/// Register a user through the API and log in, returning the bearer
/// token and the user's id
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) -> (String, String) {
    let response = server
        .post("/auth/register")
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code().as_u16(), 201, "registration failed");

    let response = server
        .post("/auth/login")
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await;
    assert_eq!(response.status_code().as_u16(), 200, "login failed");

    let body: serde_json::Value = response.json();
    let token = body["access_token"].as_str().unwrap().to_string();
    let user_id = body["user"]["id"].as_str().unwrap().to_string();
    (token, user_id)
}

/// Create a question through the API, returning its id
pub async fn create_question(server: &TestServer, token: &str, title: &str, description: &str) -> String {
    let response = server
        .post("/questions")
        .authorization_bearer(token)
        .json(&serde_json::json!({
            "title": title,
            "description": description,
        }))
        .await;
    assert_eq!(response.status_code().as_u16(), 201, "question creation failed");

    let body: serde_json::Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

/// Create a comment through the API, returning its id
pub async fn create_comment(
    server: &TestServer,
    token: &str,
    question_id: &str,
    content: &str,
) -> String {
    let response = server
        .post("/comments")
        .authorization_bearer(token)
        .json(&serde_json::json!({
            "content": content,
            "question_id": question_id,
        }))
        .await;
    assert_eq!(response.status_code().as_u16(), 201, "comment creation failed");

    let body: serde_json::Value = response.json();
    body["id"].as_str().unwrap().to_string()
}

/// Count rows in a table, for asserting on storage side effects
pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    // Table names come from the test itself, never from input.
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count query failed")
}
