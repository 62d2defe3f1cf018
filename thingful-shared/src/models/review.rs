/// Review model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE thingful_reviews (
///     id BIGSERIAL PRIMARY KEY,
///     text TEXT NOT NULL,
///     rating INTEGER NOT NULL,
///     thing_id BIGINT NOT NULL REFERENCES thingful_things(id) ON DELETE CASCADE,
///     user_id BIGINT NOT NULL REFERENCES thingful_users(id) ON DELETE CASCADE,
///     date_created TIMESTAMPTZ NOT NULL DEFAULT now()
/// );
/// ```
///
/// Referential integrity is enforced by the foreign keys, not by the
/// application. Reads join the author's row so responses can embed a `user`
/// object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::sanitize::escape_html;

/// Review row as stored
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Review {
    /// Unique review ID (server-generated)
    pub id: i64,

    /// Review text
    pub text: String,

    /// Rating, 1 through 5
    pub rating: i32,

    /// Reviewed thing
    pub thing_id: i64,

    /// Review author
    pub user_id: i64,

    /// When the review was created
    pub date_created: DateTime<Utc>,
}

/// Review row joined with its author
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReviewWithUser {
    /// Unique review ID
    pub id: i64,

    /// Review text
    pub text: String,

    /// Rating, 1 through 5
    pub rating: i32,

    /// Reviewed thing
    pub thing_id: i64,

    /// Review author
    pub user_id: i64,

    /// When the review was created
    pub date_created: DateTime<Utc>,

    /// Author's user name
    pub user_name: String,
}

/// Input for creating a new review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    /// Review text
    pub text: String,

    /// Rating, 1 through 5
    pub rating: i32,

    /// Reviewed thing (must exist)
    pub thing_id: i64,

    /// Review author (must exist)
    pub user_id: i64,
}

/// Author object embedded in review payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewAuthor {
    /// Author's user ID
    pub id: i64,

    /// Author's user name (HTML-escaped)
    pub user_name: String,
}

/// Public representation of a review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewPayload {
    /// Review ID
    pub id: i64,

    /// Review text (HTML-escaped)
    pub text: String,

    /// Rating
    pub rating: i32,

    /// Reviewed thing
    pub thing_id: i64,

    /// When the review was created
    pub date_created: DateTime<Utc>,

    /// Review author
    pub user: ReviewAuthor,
}

impl From<ReviewWithUser> for ReviewPayload {
    fn from(review: ReviewWithUser) -> Self {
        Self {
            id: review.id,
            text: escape_html(&review.text),
            rating: review.rating,
            thing_id: review.thing_id,
            date_created: review.date_created,
            user: ReviewAuthor {
                id: review.user_id,
                user_name: escape_html(&review.user_name),
            },
        }
    }
}

impl Review {
    /// Creates a new review in the database
    ///
    /// # Errors
    ///
    /// Returns an error if `thing_id` or `user_id` references a missing row
    /// (foreign key violation) or the database connection fails.
    pub async fn create(pool: &PgPool, data: CreateReview) -> Result<Self, sqlx::Error> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO thingful_reviews (text, rating, thing_id, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, text, rating, thing_id, user_id, date_created
            "#,
        )
        .bind(data.text)
        .bind(data.rating)
        .bind(data.thing_id)
        .bind(data.user_id)
        .fetch_one(pool)
        .await?;

        Ok(review)
    }

    /// Finds a review by ID, joined with its author
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<ReviewWithUser>, sqlx::Error> {
        let review = sqlx::query_as::<_, ReviewWithUser>(
            r#"
            SELECT r.id, r.text, r.rating, r.thing_id, r.user_id, r.date_created,
                   u.user_name
            FROM thingful_reviews r
            JOIN thingful_users u ON u.id = r.user_id
            WHERE r.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(review)
    }

    /// Lists all reviews for a thing, joined with their authors
    ///
    /// Ordered by creation time, newest first.
    pub async fn list_for_thing(
        pool: &PgPool,
        thing_id: i64,
    ) -> Result<Vec<ReviewWithUser>, sqlx::Error> {
        let reviews = sqlx::query_as::<_, ReviewWithUser>(
            r#"
            SELECT r.id, r.text, r.rating, r.thing_id, r.user_id, r.date_created,
                   u.user_name
            FROM thingful_reviews r
            JOIN thingful_users u ON u.id = r.user_id
            WHERE r.thing_id = $1
            ORDER BY r.date_created DESC
            "#,
        )
        .bind(thing_id)
        .fetch_all(pool)
        .await?;

        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_review() -> ReviewWithUser {
        ReviewWithUser {
            id: 42,
            text: "Nice <script>alert('xss')</script> thing".to_string(),
            rating: 4,
            thing_id: 2,
            user_id: 9,
            date_created: Utc::now(),
            user_name: "reviewer".to_string(),
        }
    }

    #[test]
    fn test_payload_embeds_author() {
        let payload = ReviewPayload::from(sample_review());

        assert_eq!(payload.user.id, 9);
        assert_eq!(payload.user.user_name, "reviewer");
    }

    #[test]
    fn test_payload_escapes_text() {
        let payload = ReviewPayload::from(sample_review());

        assert!(!payload.text.contains('<'));
        assert!(payload.text.contains("&lt;script&gt;"));
        assert_eq!(payload.rating, 4);
    }

    #[test]
    fn test_payload_serializes_user_object() {
        let payload = ReviewPayload::from(sample_review());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["user"]["id"], 9);
        assert_eq!(value["thing_id"], 2);
        assert!(value.get("user_id").is_none());
    }
}
