/**
 * Question HTTP Handlers
 *
 * Handlers for the /questions endpoints. Browsing (list, paginate,
 * search, hot, related, get) is public; create, update, and delete sit
 * behind the auth middleware and enforce ownership on mutation.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::ownership::assert_owner;
use crate::questions::db::{self, HotQuestion, Question};
use crate::questions::types::{
    CreateQuestionRequest, PageParams, PaginatedQuestions, RankingParams, SearchParams,
    UpdateQuestionRequest,
};

/// Create a question owned by the authenticated user
///
/// The owner id and denormalized username are stamped from the verified
/// token claims, never from the request body.
pub async fn create_question(
    State(pool): State<PgPool>,
    AuthUser(identity): AuthUser,
    Json(request): Json<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::validation("Title is required"));
    }
    if request.description.trim().is_empty() {
        return Err(ApiError::validation("Description is required"));
    }

    let question = db::create_question(
        &pool,
        &request.title,
        &request.description,
        request.status,
        identity.user_id,
        &identity.username,
    )
    .await?;

    tracing::info!("Question created: {} by {}", question.id, identity.username);

    Ok((StatusCode::CREATED, Json(question)))
}

/// List all questions, newest first
pub async fn list_questions(State(pool): State<PgPool>) -> Result<Json<Vec<Question>>, ApiError> {
    let questions = db::list_questions(&pool).await?;
    Ok(Json(questions))
}

/// Paginated listing
///
/// A page past the end returns an empty list with the totals unchanged,
/// not an error.
pub async fn list_questions_paginated(
    State(pool): State<PgPool>,
    Query(params): Query<PageParams>,
) -> Result<Json<PaginatedQuestions>, ApiError> {
    let (page, limit) = params.normalize();
    let offset = (page - 1) * limit;

    let (total, questions) = db::count_and_list_page(&pool, limit, offset).await?;

    Ok(Json(PaginatedQuestions::new(questions, total, page, limit)))
}

/// Substring search over title and description
pub async fn search_questions(
    State(pool): State<PgPool>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Err(ApiError::EmptyQuery);
    }

    let questions = db::search_questions(&pool, query).await?;
    Ok(Json(questions))
}

/// Most-commented questions, with their comment counts
pub async fn hot_questions(
    State(pool): State<PgPool>,
    Query(params): Query<RankingParams>,
) -> Result<Json<Vec<HotQuestion>>, ApiError> {
    let limit = params.normalize();
    let questions = db::hot_questions(&pool, limit).await?;
    Ok(Json(questions))
}

/// Fetch a single question
pub async fn get_question(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
) -> Result<Json<Question>, ApiError> {
    let question = db::get_question_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound("Question"))?;

    Ok(Json(question))
}

/// Recent other questions (placeholder related ranking)
pub async fn related_questions(
    State(pool): State<PgPool>,
    Path(id): Path<Uuid>,
    Query(params): Query<RankingParams>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let limit = params.normalize();
    let questions = db::related_questions(&pool, id, limit).await?;
    Ok(Json(questions))
}

/// Update a question; owner only
pub async fn update_question(
    State(pool): State<PgPool>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateQuestionRequest>,
) -> Result<Json<Question>, ApiError> {
    let existing = db::get_question_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound("Question"))?;

    assert_owner(existing.user_id, identity.user_id)?;

    let question = db::update_question(
        &pool,
        id,
        &request.title,
        &request.description,
        request.status,
    )
    .await?
    // Deleted between the ownership check and the update.
    .ok_or(ApiError::NotFound("Question"))?;

    tracing::info!("Question updated: {}", id);

    Ok(Json(question))
}

/// Delete a question; owner only, comments cascade
pub async fn delete_question(
    State(pool): State<PgPool>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let existing = db::get_question_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound("Question"))?;

    assert_owner(existing.user_id, identity.user_id)?;

    db::delete_question(&pool, id).await?;

    tracing::info!("Question deleted: {}", id);

    Ok(StatusCode::NO_CONTENT)
}
