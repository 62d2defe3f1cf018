/// Thing endpoints
///
/// # Endpoints
///
/// - `GET /api/things` - List things with review aggregates
/// - `POST /api/things` - Create a thing
/// - `GET /api/things/:thing_id` - Fetch one thing
/// - `GET /api/things/:thing_id/reviews` - Reviews for a thing
///
/// All of these require basic authentication.

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
use thingful_shared::models::{
    review::{Review, ReviewPayload},
    thing::{CreateThing, Thing, ThingPayload},
};

/// Thing creation request body
#[derive(Debug, Deserialize)]
pub struct NewThingRequest {
    /// Title (required)
    pub title: Option<String>,

    /// Image URL (required)
    pub image: Option<String>,

    /// Optional description
    pub content: Option<String>,
}

/// List all things
pub async fn list_things(State(state): State<AppState>) -> ApiResult<Json<Vec<ThingPayload>>> {
    let things = Thing::list(&state.db).await?;

    Ok(Json(things.into_iter().map(ThingPayload::from).collect()))
}

/// Fetch a thing by ID
///
/// # Errors
///
/// - `404 Not Found`: `{"error": "Thing doesn't exist"}`
pub async fn get_thing(
    State(state): State<AppState>,
    Path(thing_id): Path<i64>,
) -> ApiResult<Json<ThingPayload>> {
    let thing = Thing::find_by_id(&state.db, thing_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Thing doesn't exist".to_string()))?;

    Ok(Json(ThingPayload::from(thing)))
}

/// List reviews for a thing
///
/// # Errors
///
/// - `404 Not Found`: `{"error": "Thing doesn't exist"}`
pub async fn list_thing_reviews(
    State(state): State<AppState>,
    Path(thing_id): Path<i64>,
) -> ApiResult<Json<Vec<ReviewPayload>>> {
    if !Thing::exists(&state.db, thing_id).await? {
        return Err(ApiError::NotFound("Thing doesn't exist".to_string()));
    }

    let reviews = Review::list_for_thing(&state.db, thing_id).await?;

    Ok(Json(reviews.into_iter().map(ReviewPayload::from).collect()))
}

/// Create a new thing
///
/// # Errors
///
/// - `400 Bad Request`: missing `title` or `image`
pub async fn create_thing(
    State(state): State<AppState>,
    Json(req): Json<NewThingRequest>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<ThingPayload>)> {
    // Required fields, checked in declaration order
    let title = require_field(req.title, "title")?;
    let image = require_field(req.image, "image")?;

    let created = Thing::create(
        &state.db,
        CreateThing {
            title,
            content: req.content,
            image,
        },
    )
    .await?;

    // Re-read through the aggregate query so the payload shape matches reads
    let thing = Thing::find_by_id(&state.db, created.id)
        .await?
        .ok_or_else(|| {
            ApiError::InternalError(format!("Created thing {} not found", created.id))
        })?;

    let location = format!("/api/things/{}", thing.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ThingPayload::from(thing)),
    ))
}
