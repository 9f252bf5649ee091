//! Server Module
//!
//! Configuration loading, application state, and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration and pool setup
//! ├── state.rs  - `AppState` and `FromRef` implementations
//! └── init.rs   - Application assembly
//! ```

/// Environment configuration and pool initialization
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
