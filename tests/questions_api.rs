//! Question API integration tests
//!
//! Run against a real PostgreSQL instance:
//! `DATABASE_URL=postgres://... cargo test -- --ignored`

mod common;

use pretty_assertions::assert_eq;
use serial_test::serial;

use common::auth::{create_comment, create_question, register_and_login, test_server};
use common::database::TestDatabase;

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn create_requires_authentication() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server
        .post("/questions")
        .json(&serde_json::json!({"title": "How?", "description": "desc"}))
        .await;
    assert_eq!(response.status_code().as_u16(), 401);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn create_stamps_owner_and_defaults_status_open() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let (token, user_id) = register_and_login(&server, "alice", "pw").await;

    let response = server
        .post("/questions")
        .authorization_bearer(&token)
        .json(&serde_json::json!({"title": "How?", "description": "desc"}))
        .await;
    assert_eq!(response.status_code().as_u16(), 201);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "OPEN");
    assert_eq!(body["user_id"], user_id.as_str());
    assert_eq!(body["username"], "alice");

    let id = body["id"].as_str().unwrap();
    let fetched = server.get(&format!("/questions/{id}")).await;
    assert_eq!(fetched.status_code().as_u16(), 200);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn list_returns_newest_first() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);
    let (token, _) = register_and_login(&server, "alice", "pw").await;

    let first = create_question(&server, &token, "first", "d").await;
    let second = create_question(&server, &token, "second", "d").await;
    let third = create_question(&server, &token, "third", "d").await;

    let response = server.get("/questions").await;
    let body: serde_json::Value = response.json();
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec![third.as_str(), second.as_str(), first.as_str()]);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn pagination_envelope_is_consistent() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);
    let (token, _) = register_and_login(&server, "alice", "pw").await;

    for i in 0..15 {
        create_question(&server, &token, &format!("question {i}"), "d").await;
    }

    let page2 = server.get("/questions/paginated?page=2&limit=10").await;
    let body: serde_json::Value = page2.json();
    assert_eq!(body["questions"].as_array().unwrap().len(), 5);
    assert_eq!(body["total"], 15);
    assert_eq!(body["page"], 2);
    assert_eq!(body["limit"], 10);
    assert_eq!(body["total_pages"], 2);

    // Past the end: empty page, totals unchanged.
    let page3 = server.get("/questions/paginated?page=3&limit=10").await;
    let body: serde_json::Value = page3.json();
    assert_eq!(body["questions"].as_array().unwrap().len(), 0);
    assert_eq!(body["total"], 15);
    assert_eq!(body["total_pages"], 2);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn search_is_case_insensitive_substring() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);
    let (token, _) = register_and_login(&server, "alice", "pw").await;

    create_question(&server, &token, "foobar", "something").await;
    create_question(&server, &token, "unrelated", "no match here").await;

    let response = server.get("/questions/search?q=Foo").await;
    assert_eq!(response.status_code().as_u16(), 200);
    let body: serde_json::Value = response.json();
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "foobar");

    // Description matches too.
    let response = server.get("/questions/search?q=MATCH").await;
    let body: serde_json::Value = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);

    let blank = server.get("/questions/search?q=").await;
    assert_eq!(blank.status_code().as_u16(), 400);
    let body: serde_json::Value = blank.json();
    assert_eq!(body["kind"], "empty_query");

    let absent = server.get("/questions/search").await;
    assert_eq!(absent.status_code().as_u16(), 400);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn search_treats_wildcards_as_literals() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);
    let (token, _) = register_and_login(&server, "alice", "pw").await;

    create_question(&server, &token, "50% done", "progress").await;
    create_question(&server, &token, "500 items", "inventory").await;
    create_question(&server, &token, "snake_case", "naming").await;
    create_question(&server, &token, "snakeXcase", "decoy").await;

    // "%" must not consume "0 items" in "500 items".
    let response = server
        .get("/questions/search")
        .add_query_param("q", "50%")
        .await;
    assert_eq!(response.status_code().as_u16(), 200);
    let body: serde_json::Value = response.json();
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "50% done");

    // "_" must not match an arbitrary single character.
    let response = server
        .get("/questions/search")
        .add_query_param("q", "snake_case")
        .await;
    let body: serde_json::Value = response.json();
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["title"], "snake_case");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn hot_ranks_by_comment_count() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);
    let (token, _) = register_and_login(&server, "alice", "pw").await;

    let quiet = create_question(&server, &token, "quiet", "d").await;
    let busy = create_question(&server, &token, "busy", "d").await;
    create_comment(&server, &token, &busy, "one").await;
    create_comment(&server, &token, &busy, "two").await;

    let response = server.get("/questions/hot?limit=5").await;
    let body: serde_json::Value = response.json();
    let results = body.as_array().unwrap();

    assert_eq!(results[0]["id"], busy.as_str());
    assert_eq!(results[0]["comment_count"], 2);
    assert_eq!(results[1]["id"], quiet.as_str());
    assert_eq!(results[1]["comment_count"], 0);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn related_excludes_the_question_itself() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);
    let (token, _) = register_and_login(&server, "alice", "pw").await;

    let subject = create_question(&server, &token, "subject", "d").await;
    let other = create_question(&server, &token, "other", "d").await;

    let response = server
        .get(&format!("/questions/{subject}/related?limit=5"))
        .await;
    let body: serde_json::Value = response.json();
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec![other.as_str()]);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn update_is_owner_only_and_leaves_content_unchanged() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let (owner_token, _) = register_and_login(&server, "owner", "pw").await;
    let (intruder_token, _) = register_and_login(&server, "intruder", "pw").await;

    let id = create_question(&server, &owner_token, "original", "original desc").await;

    let forbidden = server
        .put(&format!("/questions/{id}"))
        .authorization_bearer(&intruder_token)
        .json(&serde_json::json!({
            "title": "hijacked", "description": "x", "status": "CLOSED"
        }))
        .await;
    assert_eq!(forbidden.status_code().as_u16(), 403);

    let fetched = server.get(&format!("/questions/{id}")).await;
    let body: serde_json::Value = fetched.json();
    assert_eq!(body["title"], "original");
    assert_eq!(body["status"], "OPEN");

    let allowed = server
        .put(&format!("/questions/{id}"))
        .authorization_bearer(&owner_token)
        .json(&serde_json::json!({
            "title": "answered now", "description": "edited", "status": "ANSWERED"
        }))
        .await;
    assert_eq!(allowed.status_code().as_u16(), 200);
    let body: serde_json::Value = allowed.json();
    assert_eq!(body["title"], "answered now");
    assert_eq!(body["status"], "ANSWERED");
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn delete_is_owner_only_and_cascades_comments() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let (owner_token, _) = register_and_login(&server, "owner", "pw").await;
    let (intruder_token, _) = register_and_login(&server, "intruder", "pw").await;

    let id = create_question(&server, &owner_token, "doomed", "d").await;
    create_comment(&server, &owner_token, &id, "a comment").await;
    create_comment(&server, &intruder_token, &id, "another").await;

    let forbidden = server
        .delete(&format!("/questions/{id}"))
        .authorization_bearer(&intruder_token)
        .await;
    assert_eq!(forbidden.status_code().as_u16(), 403);
    assert_eq!(common::auth::count_rows(db.pool(), "comments").await, 2);

    let allowed = server
        .delete(&format!("/questions/{id}"))
        .authorization_bearer(&owner_token)
        .await;
    assert_eq!(allowed.status_code().as_u16(), 204);

    assert_eq!(common::auth::count_rows(db.pool(), "questions").await, 0);
    assert_eq!(common::auth::count_rows(db.pool(), "comments").await, 0);

    let gone = server.get(&format!("/questions/{id}")).await;
    assert_eq!(gone.status_code().as_u16(), 404);
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL instance"]
async fn unknown_question_is_not_found() {
    let db = TestDatabase::new().await;
    let server = test_server(&db);

    let response = server
        .get(&format!("/questions/{}", uuid::Uuid::new_v4()))
        .await;
    assert_eq!(response.status_code().as_u16(), 404);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "not_found");
    assert_eq!(body["error"], "Question not found");
}
