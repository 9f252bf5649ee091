/**
 * Token Data Handler
 *
 * Implements GET /auth/data, the "who am I" lookup. The route sits
 * behind the auth middleware, so by the time this handler runs the
 * bearer token has already been verified and its claims attached to the
 * request. The handler just echoes them back as a user summary.
 */

use axum::response::Json;

use crate::auth::handlers::types::UserSummary;
use crate::middleware::auth::AuthUser;

/// Return the identity embedded in the presented token
pub async fn get_data(AuthUser(identity): AuthUser) -> Json<UserSummary> {
    Json(UserSummary {
        id: identity.user_id.to_string(),
        username: identity.username,
    })
}
