//! Routes Module
//!
//! HTTP route configuration: the public/protected route split and the
//! middleware wiring live in [`router`].

/// Route table assembly
pub mod router;

pub use router::create_router;
