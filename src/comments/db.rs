/**
 * Comment Model and Database Operations
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Comment struct representing a comment in the database
///
/// `username` is the author's username captured at creation, same
/// denormalization as on questions.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    /// Parent question ID
    pub question_id: Uuid,
    /// Authoring user ID
    pub user_id: Uuid,
    /// Denormalized author username
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create a new comment on `question_id`
pub async fn create_comment(
    pool: &PgPool,
    content: &str,
    question_id: Uuid,
    user_id: Uuid,
    username: &str,
) -> Result<Comment, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, content, question_id, user_id, username, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, content, question_id, user_id, username, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(content)
    .bind(question_id)
    .bind(user_id)
    .bind(username)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// List a question's comments, oldest first
///
/// Ascending creation order: comments read as a conversation thread,
/// the opposite of the newest-first question listings.
pub async fn list_comments_by_question(
    pool: &PgPool,
    question_id: Uuid,
) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, question_id, user_id, username, created_at, updated_at
        FROM comments
        WHERE question_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(question_id)
    .fetch_all(pool)
    .await
}

/// Get comment by ID
pub async fn get_comment_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, content, question_id, user_id, username, created_at, updated_at
        FROM comments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a comment
pub async fn delete_comment(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM comments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
