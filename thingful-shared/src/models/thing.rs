/// Thing model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE thingful_things (
///     id BIGSERIAL PRIMARY KEY,
///     title TEXT NOT NULL,
///     content TEXT,
///     image TEXT NOT NULL,
///     date_created TIMESTAMPTZ NOT NULL DEFAULT now()
/// );
/// ```
///
/// Read queries join against `thingful_reviews` so every returned thing
/// carries its review count and average rating.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::sanitize::escape_html;

/// Thing row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Thing {
    /// Unique thing ID (server-generated)
    pub id: i64,

    /// Title
    pub title: String,

    /// Optional free-text description
    pub content: Option<String>,

    /// Image URL
    pub image: String,

    /// When the thing was created
    pub date_created: DateTime<Utc>,
}

/// Thing row joined with review aggregates
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ThingWithRating {
    /// Unique thing ID
    pub id: i64,

    /// Title
    pub title: String,

    /// Optional free-text description
    pub content: Option<String>,

    /// Image URL
    pub image: String,

    /// When the thing was created
    pub date_created: DateTime<Utc>,

    /// Number of reviews for this thing
    pub number_of_reviews: i64,

    /// Average review rating (0 when unreviewed)
    pub average_review_rating: f64,
}

/// Input for creating a new thing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateThing {
    /// Title
    pub title: String,

    /// Optional free-text description
    pub content: Option<String>,

    /// Image URL
    pub image: String,
}

/// Public representation of a thing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThingPayload {
    /// Thing ID
    pub id: i64,

    /// Title (HTML-escaped)
    pub title: String,

    /// Description (HTML-escaped)
    pub content: Option<String>,

    /// Image URL (HTML-escaped)
    pub image: String,

    /// When the thing was created
    pub date_created: DateTime<Utc>,

    /// Number of reviews
    pub number_of_reviews: i64,

    /// Average review rating
    pub average_review_rating: f64,
}

impl From<ThingWithRating> for ThingPayload {
    fn from(thing: ThingWithRating) -> Self {
        Self {
            id: thing.id,
            title: escape_html(&thing.title),
            content: thing.content.as_deref().map(escape_html),
            image: escape_html(&thing.image),
            date_created: thing.date_created,
            number_of_reviews: thing.number_of_reviews,
            average_review_rating: thing.average_review_rating,
        }
    }
}

impl Thing {
    /// Creates a new thing in the database
    pub async fn create(pool: &PgPool, data: CreateThing) -> Result<Self, sqlx::Error> {
        let thing = sqlx::query_as::<_, Thing>(
            r#"
            INSERT INTO thingful_things (title, content, image)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, image, date_created
            "#,
        )
        .bind(data.title)
        .bind(data.content)
        .bind(data.image)
        .fetch_one(pool)
        .await?;

        Ok(thing)
    }

    /// Lists all things with their review aggregates
    ///
    /// Ordered by ID so listings are stable across requests.
    pub async fn list(pool: &PgPool) -> Result<Vec<ThingWithRating>, sqlx::Error> {
        let things = sqlx::query_as::<_, ThingWithRating>(
            r#"
            SELECT t.id, t.title, t.content, t.image, t.date_created,
                   COUNT(r.id) AS number_of_reviews,
                   COALESCE(AVG(r.rating), 0)::float8 AS average_review_rating
            FROM thingful_things t
            LEFT JOIN thingful_reviews r ON r.thing_id = t.id
            GROUP BY t.id
            ORDER BY t.id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(things)
    }

    /// Finds a thing by ID with its review aggregates
    ///
    /// Returns the thing if found, `None` otherwise.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<ThingWithRating>, sqlx::Error> {
        let thing = sqlx::query_as::<_, ThingWithRating>(
            r#"
            SELECT t.id, t.title, t.content, t.image, t.date_created,
                   COUNT(r.id) AS number_of_reviews,
                   COALESCE(AVG(r.rating), 0)::float8 AS average_review_rating
            FROM thingful_things t
            LEFT JOIN thingful_reviews r ON r.thing_id = t.id
            WHERE t.id = $1
            GROUP BY t.id
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(thing)
    }

    /// Checks whether a thing with the given ID exists
    pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM thingful_things WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }
}
