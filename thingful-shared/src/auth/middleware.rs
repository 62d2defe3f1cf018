/// Basic authentication middleware for Axum
///
/// Every protected route runs three checks, each failing closed:
///
/// 1. Missing `Authorization` header (or a non-Basic scheme) rejects with
///    401 `{"error": "Missing basic token"}`.
/// 2. An undecodable token, empty credentials, an unknown user name, or a
///    password mismatch rejects with 401 `{"error": "Unauthorized request"}`.
///    The message is deliberately identical for all of these so a client
///    cannot probe which check failed.
/// 3. Otherwise the authenticated user is attached to request extensions as
///    [`AuthUser`] and the request proceeds.
///
/// # Example
///
/// ```no_run
/// use axum::{Extension, Router, routing::get};
/// use thingful_shared::auth::middleware::AuthUser;
///
/// async fn protected_handler(Extension(user): Extension<AuthUser>) -> String {
///     format!("Hello, {}!", user.user_name)
/// }
/// ```

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::PgPool;

use super::basic::Credentials;
use super::password::verify_password;
use crate::models::user::User;

/// Authenticated user attached to request extensions
///
/// Handlers extract it with Axum's `Extension` extractor.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// ID of the authenticated user
    pub id: i64,

    /// User name of the authenticated user
    pub user_name: String,
}

/// Error type for the authentication middleware
#[derive(Debug)]
pub enum AuthError {
    /// Authorization header absent or not a Basic scheme
    MissingToken,

    /// Credentials present but not valid (undifferentiated on the wire)
    Unauthorized,

    /// User lookup failed
    DatabaseError(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AuthError::MissingToken => (StatusCode::UNAUTHORIZED, "Missing basic token"),
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized request"),
            AuthError::DatabaseError(msg) => {
                tracing::error!("Auth middleware database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Basic authentication middleware
///
/// Validates credentials from the `Authorization: Basic <token>` header
/// against the `thingful_users` table and attaches [`AuthUser`] on success.
///
/// # Errors
///
/// Returns 401 for missing tokens and for any credential failure, and 500
/// only when the user lookup itself fails.
pub async fn basic_auth_middleware(
    pool: PgPool,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    // A non-Basic scheme counts as a missing token
    let token = strip_basic_scheme(auth_header).ok_or(AuthError::MissingToken)?;

    // Decode credentials
    let credentials = Credentials::from_basic_token(token).ok_or(AuthError::Unauthorized)?;

    if credentials.is_empty() {
        return Err(AuthError::Unauthorized);
    }

    // Look up the user
    let user = User::find_by_user_name(&pool, &credentials.user_name)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?
        .ok_or(AuthError::Unauthorized)?;

    // Verify password against the stored hash. A corrupt stored hash also
    // rejects with the undifferentiated message.
    let valid = verify_password(&credentials.password, &user.password_hash)
        .await
        .map_err(|e| {
            tracing::warn!(user_name = %user.user_name, "Password verification failed: {}", e);
            AuthError::Unauthorized
        })?;

    if !valid {
        return Err(AuthError::Unauthorized);
    }

    // Attach the authenticated user to request extensions
    req.extensions_mut().insert(AuthUser {
        id: user.id,
        user_name: user.user_name,
    });

    Ok(next.run(req).await)
}

/// Strips a case-insensitive `Basic ` prefix from a header value
fn strip_basic_scheme(header_value: &str) -> Option<&str> {
    let scheme = header_value.get(..6)?;
    scheme
        .eq_ignore_ascii_case("basic ")
        .then(|| &header_value[6..])
}
