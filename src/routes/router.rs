/**
 * Router Configuration
 *
 * Builds the full route table. Routes are grouped into a public router
 * (browsing, registration, login) and a protected router whose routes
 * all sit behind the authentication middleware; the two are merged and
 * share the same `AppState`.
 *
 * # Routes
 *
 * ## Public
 * - `POST /auth/register` - create user
 * - `POST /auth/login` - issue token
 * - `GET /questions` - list all, newest first
 * - `GET /questions/paginated` - paginated listing
 * - `GET /questions/search` - substring search
 * - `GET /questions/hot` - most-commented
 * - `GET /questions/{id}` - fetch one
 * - `GET /questions/{id}/related` - recent others (placeholder)
 * - `GET /comments/question/{question_id}` - comments, oldest first
 *
 * ## Protected (bearer token required)
 * - `GET /auth/data` - identity embedded in the token
 * - `POST /questions` - create question
 * - `PUT /questions/{id}` - update, owner only
 * - `DELETE /questions/{id}` - delete, owner only, cascades comments
 * - `POST /comments` - create comment
 * - `DELETE /comments/{id}` - delete, author only
 */

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::handlers::{get_data, login, register};
use crate::comments::handlers as comments;
use crate::middleware::auth::require_auth;
use crate::questions::handlers as questions;
use crate::server::state::AppState;

/// Create the router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    let public = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/questions", get(questions::list_questions))
        .route("/questions/paginated", get(questions::list_questions_paginated))
        .route("/questions/search", get(questions::search_questions))
        .route("/questions/hot", get(questions::hot_questions))
        .route("/questions/{id}", get(questions::get_question))
        .route("/questions/{id}/related", get(questions::related_questions))
        .route(
            "/comments/question/{question_id}",
            get(comments::list_comments),
        );

    let protected = Router::new()
        .route("/auth/data", get(get_data))
        .route("/questions", post(questions::create_question))
        .route("/questions/{id}", put(questions::update_question))
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/comments", post(comments::create_comment))
        .route("/comments/{id}", delete(comments::delete_comment))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
