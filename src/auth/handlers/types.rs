/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register, login, and
 * token-data handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Requested username (unique, case-sensitive)
    pub username: String,
    /// Password (hashed with bcrypt before storage)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    /// Password (verified against the stored hash)
    pub password: String,
}

/// Auth response returned by login
///
/// Contains the bearer token and a public user summary.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// Signed bearer token
    pub access_token: String,
    /// User information (never includes the password hash)
    pub user: UserSummary,
}

/// Public user summary
///
/// The only user shape that ever leaves the service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserSummary {
    /// User's unique ID (UUID)
    pub id: String,
    /// User's username
    pub username: String,
}
