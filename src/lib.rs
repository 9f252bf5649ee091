//! stack-underflow - Q&A Platform Backend
//!
//! A question-and-answer backend: users register and authenticate with
//! bearer tokens, post questions, and comment on them. Reads are public;
//! every mutation is authenticated and ownership-checked.
//!
//! # Module Structure
//!
//! - **`auth`** - registration, login, bcrypt hashing, JWT sessions
//! - **`middleware`** - the bearer-token access boundary
//! - **`ownership`** - the owner-only mutation guard
//! - **`questions`** - question CRUD, pagination, search, rankings
//! - **`comments`** - comment creation, threads, author-guarded delete
//! - **`error`** - domain error taxonomy and HTTP conversion
//! - **`server`** - configuration, state, application assembly
//! - **`routes`** - route table
//!
//! # Authentication Model
//!
//! Login issues an HMAC-signed, time-limited JWT embedding
//! `{userId, username}`. Protected routes verify it in middleware before
//! any business logic runs; handlers receive the verified identity via
//! the [`middleware::AuthUser`] extractor and stamp ownership from it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use stack_underflow::auth::sessions::AuthConfig;
//! use stack_underflow::server::create_app;
//!
//! # async fn example(pool: sqlx::PgPool) {
//! let app = create_app(pool, AuthConfig::from_env());
//! // Serve `app` with axum::serve
//! # }
//! ```

/// Authentication: users, sessions, handlers
pub mod auth;

/// Comment model and endpoints
pub mod comments;

/// Domain errors and HTTP conversion
pub mod error;

/// Request-processing middleware
pub mod middleware;

/// Ownership guard for mutating operations
pub mod ownership;

/// Question model and endpoints
pub mod questions;

/// Route configuration
pub mod routes;

/// Server configuration, state, and assembly
pub mod server;
