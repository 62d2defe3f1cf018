/// Review endpoints
///
/// # Endpoints
///
/// - `POST /api/reviews` - Create a review (basic auth)
/// - `GET /api/reviews/:review_id` - Fetch a review (basic auth)
///
/// Review creation validates the presence of `text`, `rating`, `user_id`,
/// and `thing_id` in that order; the first missing field is named in the
/// 400 response. Referential integrity of `thing_id`/`user_id` is left to
/// the database's foreign keys.

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
use thingful_shared::models::review::{CreateReview, Review, ReviewPayload};

/// Review creation request body
#[derive(Debug, Deserialize)]
pub struct NewReviewRequest {
    /// Review text (required)
    pub text: Option<String>,

    /// Rating, 1 through 5 (required)
    pub rating: Option<i32>,

    /// Review author (required)
    pub user_id: Option<i64>,

    /// Reviewed thing (required)
    pub thing_id: Option<i64>,
}

/// Create a new review
///
/// # Endpoint
///
/// ```text
/// POST /api/reviews
/// Authorization: Basic <token>
/// Content-Type: application/json
///
/// {
///   "text": "Test new review",
///   "rating": 3,
///   "user_id": 1,
///   "thing_id": 2
/// }
/// ```
///
/// Responds 201 with `Location: /api/reviews/{id}` and the created review,
/// including an embedded `user` object.
///
/// # Errors
///
/// - `400 Bad Request`: `{"error": "Missing '<field>' in request body"}`,
///   or a rating outside 1..=5
/// - `500 Internal Server Error`: database failure
pub async fn create_review(
    State(state): State<AppState>,
    Json(req): Json<NewReviewRequest>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<ReviewPayload>)> {
    // Required fields, checked in declaration order
    let text = require_field(req.text, "text")?;
    let rating = require_field(req.rating, "rating")?;
    let user_id = require_field(req.user_id, "user_id")?;
    let thing_id = require_field(req.thing_id, "thing_id")?;

    if !(1..=5).contains(&rating) {
        return Err(ApiError::BadRequest(
            "Rating must be a number between 1 and 5".to_string(),
        ));
    }

    let created = Review::create(
        &state.db,
        CreateReview {
            text,
            rating,
            thing_id,
            user_id,
        },
    )
    .await?;

    // Re-read joined with the author so the payload embeds the user object
    let review = Review::find_by_id(&state.db, created.id)
        .await?
        .ok_or_else(|| {
            ApiError::InternalError(format!("Created review {} not found", created.id))
        })?;

    let location = format!("/api/reviews/{}", review.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ReviewPayload::from(review)),
    ))
}

/// Fetch a review by ID
///
/// # Errors
///
/// - `404 Not Found`: `{"error": "Review doesn't exist"}`
pub async fn get_review(
    State(state): State<AppState>,
    Path(review_id): Path<i64>,
) -> ApiResult<Json<ReviewPayload>> {
    let review = Review::find_by_id(&state.db, review_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Review doesn't exist".to_string()))?;

    Ok(Json(ReviewPayload::from(review)))
}
