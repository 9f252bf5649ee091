/**
 * Error Conversion
 *
 * Converts `ApiError` into HTTP responses so handlers can return it
 * directly with `?`.
 *
 * # Response Format
 *
 * Error responses are JSON with a stable shape:
 * ```json
 * {
 *   "error": "Question not found",
 *   "kind": "not_found",
 *   "status": 404
 * }
 * ```
 *
 * Internal errors (storage, hashing, signing) are logged with their full
 * source here, then rendered as a generic 500 body.
 */

use axum::{
    body::Body,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // The only place internal error sources surface is the log.
        match &self {
            ApiError::Database(e) => tracing::error!("Database error: {:?}", e),
            ApiError::Hash(e) => tracing::error!("Bcrypt error: {:?}", e),
            ApiError::TokenCreation(e) => tracing::error!("Token creation error: {:?}", e),
            other => tracing::debug!("Request failed: {}", other),
        }

        let body = serde_json::json!({
            "error": self.message(),
            "kind": self.kind(),
            "status": status.as_u16(),
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap_or_else(|_| {
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .body(Body::from("Internal Server Error"))
                    .unwrap()
            })
    }
}
