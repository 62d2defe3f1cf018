/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `users`: Registration and user lookup
/// - `things`: Thing listing, detail, creation, and per-thing reviews
/// - `reviews`: Review creation and lookup

pub mod health;
pub mod reviews;
pub mod things;
pub mod users;

use crate::error::{ApiError, ApiResult};

/// Unwraps a required request-body field, or returns the standard 400
///
/// Fields are checked in declaration order so the first missing one names
/// the error.
pub(crate) fn require_field<T>(value: Option<T>, field: &str) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::missing_field(field))
}
