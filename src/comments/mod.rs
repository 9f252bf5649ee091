//! Comments Module
//!
//! Comment creation, conversation-order listing, and author-guarded
//! deletion.
//!
//! # Module Structure
//!
//! ```text
//! comments/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Comment model and database operations
//! └── handlers.rs - HTTP handlers
//! ```

/// Comment model and database operations
pub mod db;

/// HTTP handlers for comment endpoints
pub mod handlers;

pub use db::Comment;
