/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Issue a bearer token embedding {userId, username}
 * 4. Return token and user summary
 *
 * # Security
 *
 * - Unknown username and wrong password return the identical
 *   `InvalidCredentials` error, so responses leak nothing about which
 *   usernames exist
 * - Passwords are never logged or returned
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;
use sqlx::PgPool;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserSummary};
use crate::auth::sessions::AuthConfig;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - if the user is unknown or the password is wrong
/// * `500 Internal Server Error` - if storage, bcrypt, or signing fails
pub async fn login(
    State(pool): State<PgPool>,
    State(auth): State<AuthConfig>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.username);

    let user = get_user_by_username(&pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed for: {}", request.username);
            ApiError::InvalidCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Login failed for: {}", request.username);
        return Err(ApiError::InvalidCredentials);
    }

    let access_token = auth.create_token(user.id, &user.username)?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(AuthResponse {
        access_token,
        user: UserSummary {
            id: user.id.to_string(),
            username: user.username,
        },
    }))
}
