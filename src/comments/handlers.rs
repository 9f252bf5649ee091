/**
 * Comment HTTP Handlers
 *
 * Handlers for the /comments endpoints. Listing is public; creating and
 * deleting sit behind the auth middleware. Deletion requires the
 * requestor to be the comment's author, the same guard questions use.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::comments::db::{self, Comment};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::ownership::assert_owner;
use crate::questions::db::get_question_by_id;

/// Create comment request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateCommentRequest {
    pub content: String,
    pub question_id: Uuid,
}

/// Create a comment on a question
///
/// The parent question must exist; commenting on a missing question is
/// a 404, not an orphaned row.
pub async fn create_comment(
    State(pool): State<PgPool>,
    AuthUser(identity): AuthUser,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    if request.content.trim().is_empty() {
        return Err(ApiError::validation("Content is required"));
    }

    get_question_by_id(&pool, request.question_id)
        .await?
        .ok_or(ApiError::NotFound("Question"))?;

    let comment = db::create_comment(
        &pool,
        &request.content,
        request.question_id,
        identity.user_id,
        &identity.username,
    )
    .await?;

    tracing::info!(
        "Comment created: {} on question {} by {}",
        comment.id,
        request.question_id,
        identity.username
    );

    Ok((StatusCode::CREATED, Json(comment)))
}

/// List a question's comments in conversation order (oldest first)
pub async fn list_comments(
    State(pool): State<PgPool>,
    Path(question_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let comments = db::list_comments_by_question(&pool, question_id).await?;
    Ok(Json(comments))
}

/// Delete a comment; author only
pub async fn delete_comment(
    State(pool): State<PgPool>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let existing = db::get_comment_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound("Comment"))?;

    assert_owner(existing.user_id, identity.user_id)?;

    db::delete_comment(&pool, id).await?;

    tracing::info!("Comment deleted: {}", id);

    Ok(StatusCode::NO_CONTENT)
}
