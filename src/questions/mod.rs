//! Questions Module
//!
//! Question CRUD and queries: newest-first listings, pagination,
//! case-insensitive substring search, comment-count ranking, and the
//! recency-based "related" placeholder.
//!
//! # Module Structure
//!
//! ```text
//! questions/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Question model and database operations
//! ├── types.rs    - Request/response types and page math
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! Reads are public. Create/update/delete run behind the auth
//! middleware, and update/delete additionally require the requestor to
//! own the question.

/// Question model and database operations
pub mod db;

/// Request/response types
pub mod types;

/// HTTP handlers for question endpoints
pub mod handlers;

pub use db::{HotQuestion, Question, QuestionStatus};
pub use types::PaginatedQuestions;
