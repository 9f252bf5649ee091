/**
 * Application State
 *
 * Central state container shared across handlers: the PostgreSQL pool
 * and the token signing configuration. `FromRef` implementations let
 * handlers extract just the piece they need (`State<PgPool>`,
 * `State<AuthConfig>`) instead of the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::AuthConfig;

/// Application state for the Axum router
///
/// Both fields are cheap to clone: the pool is an `Arc` internally and
/// the auth config is a small owned struct.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// Token signing configuration
    pub auth: AuthConfig,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
