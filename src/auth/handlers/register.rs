/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Presence-check username and password
 * 2. Reject if the username is already taken
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Return the public user summary
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - The password hash is never returned in responses
 * - Uniqueness is ultimately enforced by the database unique index, so
 *   concurrent registrations of the same username cannot both succeed;
 *   the lookup below just produces the common-case error without paying
 *   for a bcrypt hash first.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{RegisterRequest, UserSummary};
use crate::auth::users::{create_user, get_user_by_username};
use crate::error::ApiError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - if username or password is blank
/// * `409 Conflict` - if the username is already taken
/// * `500 Internal Server Error` - if hashing or the insert fails
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserSummary>), ApiError> {
    tracing::info!("Registration request for username: {}", request.username);

    if request.username.trim().is_empty() {
        return Err(ApiError::validation("Username is required"));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }

    // Fast path: report the conflict before hashing. The unique index
    // still catches any insert that races past this check.
    if get_user_by_username(&pool, &request.username).await?.is_some() {
        tracing::warn!("Username already exists: {}", request.username);
        return Err(ApiError::UsernameTaken);
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(&pool, &request.username, &password_hash).await?;

    tracing::info!("User created successfully: {}", user.username);

    Ok((
        StatusCode::CREATED,
        Json(UserSummary {
            id: user.id.to_string(),
            username: user.username,
        }),
    ))
}
