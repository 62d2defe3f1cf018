//! # Thingful Shared Library
//!
//! This crate contains shared types and business logic used by the Thingful
//! API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their SQL operations
//! - `auth`: Password hashing/policy and Basic authentication middleware
//! - `db`: PostgreSQL connection pool management
//! - `sanitize`: HTML escaping for user-supplied text

pub mod auth;
pub mod db;
pub mod models;
pub mod sanitize;

/// Current version of the Thingful shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
