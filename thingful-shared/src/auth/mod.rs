/// Authentication for Thingful
///
/// This module provides everything the API needs to authenticate requests:
///
/// - `password`: bcrypt hashing/verification and the password strength policy
/// - `basic`: parsing of `Authorization: Basic` headers
/// - `middleware`: Axum middleware gating protected routes

pub mod basic;
pub mod middleware;
pub mod password;

pub use basic::Credentials;
pub use middleware::{basic_auth_middleware, AuthError, AuthUser};
pub use password::{hash_password, validate_password, verify_password, PasswordError};
