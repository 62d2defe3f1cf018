/// User endpoints
///
/// # Endpoints
///
/// - `POST /api/users` - Register a new user (public)
/// - `GET /api/users/:user_id` - Fetch a user (basic auth)
///
/// Registration validates in a fixed order before touching the database:
/// required fields, then password strength, then user name availability.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::require_field,
};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    Json,
};
use serde::Deserialize;
use thingful_shared::{
    auth::password::{hash_password, validate_password},
    models::user::{CreateUser, User, UserPayload},
};

/// Registration request body
///
/// All fields optional at the deserialization layer so missing ones can be
/// reported with the standard 400 message.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Login name (required, must be unique)
    pub user_name: Option<String>,

    /// Plaintext password (required, validated for strength)
    pub password: Option<String>,

    /// Display name (required)
    pub full_name: Option<String>,

    /// Optional nickname
    pub nick_name: Option<String>,
}

/// Register a new user
///
/// # Endpoint
///
/// ```text
/// POST /api/users
/// Content-Type: application/json
///
/// {
///   "user_name": "demo.user",
///   "password": "My@Passw0rd",
///   "full_name": "Demo User",
///   "nick_name": "demo"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing field, weak password, or taken user name
/// - `500 Internal Server Error`: hashing or database failure
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<UserPayload>)> {
    // Required fields, checked in declaration order
    let user_name = require_field(req.user_name, "user_name")?;
    let password = require_field(req.password, "password")?;
    let full_name = require_field(req.full_name, "full_name")?;

    // Password strength policy
    validate_password(&password).map_err(ApiError::BadRequest)?;

    // User name availability
    if User::exists_by_user_name(&state.db, &user_name).await? {
        return Err(ApiError::BadRequest("Username already taken".to_string()));
    }

    // Hash and insert
    let password_hash = hash_password(&password).await?;

    let user = User::create(
        &state.db,
        CreateUser {
            full_name,
            user_name,
            nick_name: req.nick_name,
            password_hash,
        },
    )
    .await?;

    let location = format!("/api/users/{}", user.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserPayload::from(user)),
    ))
}

/// Fetch a user by ID
///
/// # Errors
///
/// - `404 Not Found`: no user with that ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserPayload>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User doesn't exist".to_string()))?;

    Ok(Json(UserPayload::from(user)))
}
