/**
 * Server Initialization
 *
 * Assembles the application router from its two runtime inputs: the
 * connection pool and the token signing configuration. Tests call
 * `create_app` directly with a test pool and a deterministic
 * `AuthConfig`; production wiring lives in `main`.
 */

use axum::Router;
use sqlx::PgPool;

use crate::auth::sessions::AuthConfig;
use crate::routes::router::create_router;
use crate::server::state::AppState;

/// Create the Axum application
pub fn create_app(pool: PgPool, auth: AuthConfig) -> Router {
    tracing::info!("Initializing stack-underflow backend");

    let app_state = AppState { pool, auth };
    create_router(app_state)
}
