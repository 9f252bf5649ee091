//! Authentication Module
//!
//! User registration, login, and bearer-token sessions.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Token signing configuration and JWT handling
//! └── handlers/       - HTTP handlers (register, login, data)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → bcrypt hash → user row
//! 2. **Login**: credentials verified → signed token embedding
//!    `{userId, username}` with a configurable TTL (default 24h)
//! 3. **Data**: bearer token verified by the middleware → claims echoed
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Unknown-user and wrong-password logins fail identically
//! - Tokens are HMAC-signed and time-limited; the secret and TTL are
//!   injected via [`sessions::AuthConfig`], never read ambiently

/// User data model and database operations
pub mod users;

/// Token signing configuration and JWT handling
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserSummary};
pub use handlers::{get_data, login, register};
pub use sessions::{AuthConfig, Claims};
