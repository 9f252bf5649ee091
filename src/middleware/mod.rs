//! Middleware Module
//!
//! Request-processing middleware. Currently the authentication boundary
//! that protects mutating routes.

/// Authentication middleware and identity extractor
pub mod auth;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
