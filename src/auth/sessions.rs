/**
 * Session Tokens
 *
 * JWT issuance and verification for user sessions.
 *
 * The signing secret and token lifetime live in `AuthConfig`, which is
 * constructed once at startup and injected wherever tokens are minted or
 * checked. Tests build their own `AuthConfig` with deterministic values
 * instead of touching the environment.
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Default token lifetime in minutes (24 hours)
pub const DEFAULT_TTL_MINUTES: i64 = 1440;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username captured at issuance
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Token signing configuration
///
/// Holds the shared HMAC secret and the token TTL. HS256 throughout
/// (`Header::default()` / `Validation::default()`).
#[derive(Clone)]
pub struct AuthConfig {
    secret: String,
    ttl_minutes: i64,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>, ttl_minutes: i64) -> Self {
        Self {
            secret: secret.into(),
            ttl_minutes,
        }
    }

    /// Load signing configuration from the environment
    ///
    /// Reads `JWT_SECRET` (required in production; a development fallback
    /// is used when unset) and `TOKEN_TTL_MINUTES` (default 1440).
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development fallback");
            "dev-secret-change-in-production".to_string()
        });

        let ttl_minutes = std::env::var("TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TTL_MINUTES);

        Self { secret, ttl_minutes }
    }

    /// Create a signed token embedding `{userId, username}`
    ///
    /// The expiration instant is `now + ttl`. Two tokens for the same
    /// user differ whenever their issuance second differs; the token is
    /// opaque to callers either way.
    pub fn create_token(&self, user_id: Uuid, username: &str) -> Result<String, ApiError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(self.ttl_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let key = EncodingKey::from_secret(self.secret.as_ref());
        encode(&Header::default(), &claims, &key).map_err(ApiError::TokenCreation)
    }

    /// Verify and decode a token
    ///
    /// Fails with `InvalidToken` if the signature does not verify, the
    /// token is malformed, or the expiration instant has passed. On
    /// success the embedded claims come back unchanged.
    pub fn verify_token(&self, token: &str) -> Result<Claims, ApiError> {
        let key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {:?}", e);
                ApiError::InvalidToken
            })
    }
}
