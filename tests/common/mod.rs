//! Shared test fixtures
//!
//! Database setup and authentication helpers used by the API
//! integration tests.

// Each test crate compiles this module; not every crate uses every helper.
#![allow(dead_code)]

pub mod auth;
pub mod database;
