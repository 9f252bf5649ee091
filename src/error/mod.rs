//! Error Module
//!
//! Domain error types for the backend and their conversion into HTTP
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - `ApiError` taxonomy and status/kind mapping
//! └── conversion.rs - `IntoResponse` implementation
//! ```
//!
//! # Usage
//!
//! Handlers return `Result<Json<T>, ApiError>`; Axum renders the error
//! through `IntoResponse` as a JSON body with a stable `kind` field.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
