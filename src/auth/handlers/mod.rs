//! Authentication HTTP Handlers
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request/response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── data.rs     - Token data ("who am I") handler
//! ```

/// Request/response types
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Token data handler
pub mod data;

pub use data::get_data;
pub use login::login;
pub use register::register;
