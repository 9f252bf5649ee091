/**
 * Authentication Middleware
 *
 * The access boundary in front of protected routes. It:
 * 1. Extracts the bearer token from the Authorization header
 * 2. Verifies the token against the injected signing configuration
 * 3. Attaches the authenticated identity to request extensions
 *
 * A missing or non-bearer header fails with `MissingCredential`; a
 * token that fails verification fails with `InvalidToken`. Both are
 * 401-class and stop the request before any business logic runs.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated identity extracted from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Pull the token out of an Authorization header value
///
/// Only the `Bearer <token>` scheme is accepted.
fn extract_bearer(header: Option<&str>) -> Result<&str, ApiError> {
    let header = header.ok_or(ApiError::MissingCredential)?;
    header
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
        .ok_or(ApiError::MissingCredential)
}

/// Authentication middleware
///
/// Applied as a `route_layer` on every mutating content route and on
/// `GET /auth/data`. Read-only browsing routes do not carry it.
pub async fn require_auth(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = extract_bearer(header).inspect_err(|_| {
        tracing::warn!("Missing or malformed Authorization header");
    })?;

    let claims = app_state.auth.verify_token(token)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        ApiError::InvalidToken
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated identity
///
/// Used as a handler parameter on protected routes to receive the
/// `AuthenticatedUser` the middleware attached.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::MissingCredential
            })?;

        Ok(AuthUser(user))
    }
}
