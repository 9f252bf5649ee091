/**
 * Question Model and Database Operations
 *
 * The question entity and every query the content service runs against
 * it: CRUD, newest-first listings, pagination, substring search, the
 * comment-count "hot" ranking, and the recency-based related lookup.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Question lifecycle status
///
/// Stored as the Postgres enum `question_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "question_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum QuestionStatus {
    Open,
    Answered,
    Closed,
}

impl Default for QuestionStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// Question struct representing a question in the database
///
/// `username` is the owner's username captured at creation. Usernames
/// are immutable, so the copy never needs resynchronization.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: QuestionStatus,
    /// Owning user ID
    pub user_id: Uuid,
    /// Denormalized owner username
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Question row joined with its comment count, for the hot ranking
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HotQuestion {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: QuestionStatus,
    pub user_id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Number of comments on this question
    pub comment_count: i64,
}

/// Create a new question owned by `user_id`
pub async fn create_question(
    pool: &PgPool,
    title: &str,
    description: &str,
    status: QuestionStatus,
    user_id: Uuid,
    username: &str,
) -> Result<Question, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO questions (id, title, description, status, user_id, username, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, title, description, status, user_id, username, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(status)
    .bind(user_id)
    .bind(username)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// List all questions, newest-created first
///
/// Unbounded; the paginated listing is the primary browse path.
pub async fn list_questions(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, title, description, status, user_id, username, created_at, updated_at
        FROM questions
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Count all questions and fetch one page, newest first
///
/// Runs in a single transaction so the total and the page contents agree
/// even while rows are being inserted concurrently.
pub async fn count_and_list_page(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<(i64, Vec<Question>), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
        .fetch_one(&mut *tx)
        .await?;

    let questions = sqlx::query_as::<_, Question>(
        r#"
        SELECT id, title, description, status, user_id, username, created_at, updated_at
        FROM questions
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok((total, questions))
}

/// Escape ILIKE metacharacters so the query matches as a literal substring
fn escape_like_pattern(query: &str) -> String {
    query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Case-insensitive substring search over title and description
///
/// `%`, `_`, and `\` in the query are literals, not wildcards.
pub async fn search_questions(pool: &PgPool, query: &str) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, title, description, status, user_id, username, created_at, updated_at
        FROM questions
        WHERE title ILIKE '%' || $1 || '%' ESCAPE '\'
           OR description ILIKE '%' || $1 || '%' ESCAPE '\'
        ORDER BY created_at DESC
        "#,
    )
    .bind(escape_like_pattern(query))
    .fetch_all(pool)
    .await
}

/// Most-commented questions first
///
/// Ranking is the explicit per-question comment count aggregate, ties
/// broken newest-first. The count is returned alongside each row.
pub async fn hot_questions(pool: &PgPool, limit: i64) -> Result<Vec<HotQuestion>, sqlx::Error> {
    sqlx::query_as::<_, HotQuestion>(
        r#"
        SELECT q.id, q.title, q.description, q.status, q.user_id, q.username,
               q.created_at, q.updated_at,
               COUNT(c.id) AS comment_count
        FROM questions q
        LEFT JOIN comments c ON c.question_id = q.id
        GROUP BY q.id
        ORDER BY comment_count DESC, q.created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Get question by ID
pub async fn get_question_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, title, description, status, user_id, username, created_at, updated_at
        FROM questions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Most recent questions other than `id`
///
/// Placeholder "related" ranking: there is no relatedness signal yet,
/// only recency with the question itself excluded.
pub async fn related_questions(
    pool: &PgPool,
    id: Uuid,
    limit: i64,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, title, description, status, user_id, username, created_at, updated_at
        FROM questions
        WHERE id <> $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(id)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Overwrite title, description, and status; touch `updated_at`
pub async fn update_question(
    pool: &PgPool,
    id: Uuid,
    title: &str,
    description: &str,
    status: QuestionStatus,
) -> Result<Option<Question>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Question>(
        r#"
        UPDATE questions
        SET title = $1, description = $2, status = $3, updated_at = $4
        WHERE id = $5
        RETURNING id, title, description, status, user_id, username, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(status)
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a question; comments cascade at the storage layer
pub async fn delete_question(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default_is_open() {
        assert_eq!(QuestionStatus::default(), QuestionStatus::Open);
    }

    #[test]
    fn test_search_pattern_escapes_wildcards() {
        assert_eq!(escape_like_pattern("50%"), r"50\%");
        assert_eq!(escape_like_pattern("a_b"), r"a\_b");
        assert_eq!(escape_like_pattern(r"back\slash"), r"back\\slash");
        assert_eq!(escape_like_pattern("plain"), "plain");
    }

    #[test]
    fn test_status_serializes_uppercase() {
        let json = serde_json::to_string(&QuestionStatus::Answered).unwrap();
        assert_eq!(json, r#""ANSWERED""#);

        let parsed: QuestionStatus = serde_json::from_str(r#""CLOSED""#).unwrap();
        assert_eq!(parsed, QuestionStatus::Closed);
    }
}
