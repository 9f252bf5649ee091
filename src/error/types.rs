/**
 * API Error Types
 *
 * This module defines the domain error taxonomy for the backend.
 * Every fallible handler returns `ApiError`, which carries enough
 * information to produce a uniform client-facing response.
 *
 * # Error Categories
 *
 * ## Client errors
 *
 * Errors caused by the request itself:
 * - Duplicate usernames, bad credentials
 * - Missing or invalid bearer tokens
 * - Missing entities, ownership violations
 * - Blank search queries, presence-check failures
 *
 * ## Internal errors
 *
 * Failures inside the service (storage, hashing, token signing). These
 * map to 500 and never expose their underlying detail to clients.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Domain errors for the Q&A backend
///
/// Each variant maps to a stable machine-readable `kind` and an HTTP
/// status code. Internal variants keep their source for logging but
/// present a generic message to clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A user with the requested username already exists.
    ///
    /// Raised by registration, either from the fast-path lookup or from
    /// the unique-constraint violation when two registrations race.
    #[error("Username already exists")]
    UsernameTaken,

    /// Login failed. Deliberately identical for an unknown username and
    /// a wrong password so callers cannot enumerate accounts.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The Authorization header is absent or does not use the bearer scheme.
    #[error("Authorization header required")]
    MissingCredential,

    /// The bearer token failed verification: bad signature, malformed,
    /// or expired.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The addressed entity does not exist. The message names its kind
    /// ("Question not found", "Comment not found").
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The requestor does not own the entity it is trying to mutate.
    #[error("You can only modify your own content")]
    Forbidden,

    /// A search was attempted with an empty or blank query.
    #[error("Search query is required")]
    EmptyQuery,

    /// A basic presence check on the request body failed.
    #[error("{0}")]
    Validation(String),

    /// Storage failure. Logged in full, surfaced as a generic 500.
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure.
    #[error("Password hashing error")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure. Verification failures become
    /// `InvalidToken` instead; this covers the encode path only.
    #[error("Token creation error")]
    TokenCreation(jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a validation error from a presence-check message
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UsernameTaken => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::MissingCredential => StatusCode::UNAUTHORIZED,
            Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::EmptyQuery => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Hash(_) | Self::TokenCreation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable machine-readable kind for client-side dispatch
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UsernameTaken => "username_taken",
            Self::InvalidCredentials => "invalid_credentials",
            Self::MissingCredential => "missing_credential",
            Self::InvalidToken => "invalid_token",
            Self::NotFound(_) => "not_found",
            Self::Forbidden => "forbidden",
            Self::EmptyQuery => "empty_query",
            Self::Validation(_) => "validation",
            Self::Database(_) | Self::Hash(_) | Self::TokenCreation(_) => "internal",
        }
    }

    /// Client-facing message
    ///
    /// Internal variants return their generic `Display` text; the
    /// underlying source is only ever logged, never serialized.
    pub fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Hash(_) | Self::TokenCreation(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}
