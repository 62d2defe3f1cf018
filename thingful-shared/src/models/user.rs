/// User model and database operations
///
/// # Schema
///
/// ```sql
/// CREATE TABLE thingful_users (
///     id BIGSERIAL PRIMARY KEY,
///     full_name TEXT NOT NULL,
///     user_name TEXT NOT NULL UNIQUE,
///     nick_name TEXT,
///     password TEXT NOT NULL,
///     date_created TIMESTAMPTZ NOT NULL DEFAULT now()
/// );
/// ```
///
/// The `password` column stores a bcrypt hash, never plaintext. The
/// [`UserPayload`] type is the only shape handlers return to clients; it
/// omits the hash entirely and HTML-escapes the free-text fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::sanitize::escape_html;

/// User account row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (server-generated)
    pub id: i64,

    /// Display name
    pub full_name: String,

    /// Login name, unique across all users
    pub user_name: String,

    /// Optional nickname
    pub nick_name: Option<String>,

    /// bcrypt password hash (stored in the `password` column)
    #[sqlx(rename = "password")]
    pub password_hash: String,

    /// When the account was created
    pub date_created: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name
    pub full_name: String,

    /// Login name (must be unique)
    pub user_name: String,

    /// Optional nickname
    pub nick_name: Option<String>,

    /// bcrypt password hash (NOT the plaintext password)
    pub password_hash: String,
}

/// Public representation of a user
///
/// Maps `nick_name` to the API field `nickname`, escapes free-text fields,
/// and never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPayload {
    /// User ID
    pub id: i64,

    /// Display name (HTML-escaped)
    pub full_name: String,

    /// Login name (HTML-escaped)
    pub user_name: String,

    /// Nickname (HTML-escaped)
    pub nickname: Option<String>,

    /// When the account was created
    pub date_created: DateTime<Utc>,
}

impl From<User> for UserPayload {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: escape_html(&user.full_name),
            user_name: escape_html(&user.user_name),
            nickname: user.nick_name.as_deref().map(escape_html),
            date_created: user.date_created,
        }
    }
}

impl User {
    /// Creates a new user in the database
    ///
    /// Returns the newly created row including the generated ID and
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the user name already exists (unique constraint
    /// violation) or the database connection fails.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO thingful_users (full_name, user_name, nick_name, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, user_name, nick_name, password, date_created
            "#,
        )
        .bind(data.full_name)
        .bind(data.user_name)
        .bind(data.nick_name)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Checks whether a user with the given user name exists
    pub async fn exists_by_user_name(pool: &PgPool, user_name: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM thingful_users WHERE user_name = $1)",
        )
        .bind(user_name)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Finds a user by user name
    ///
    /// Returns the user if found, `None` otherwise.
    pub async fn find_by_user_name(
        pool: &PgPool,
        user_name: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, user_name, nick_name, password, date_created
            FROM thingful_users
            WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by ID
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, full_name, user_name, nick_name, password, date_created
            FROM thingful_users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            full_name: "Test User".to_string(),
            user_name: "test.user".to_string(),
            nick_name: Some("testy".to_string()),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            date_created: Utc::now(),
        }
    }

    #[test]
    fn test_payload_never_contains_password() {
        let payload = UserPayload::from(sample_user());
        let value = serde_json::to_value(&payload).unwrap();

        let object = value.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
    }

    #[test]
    fn test_payload_renames_nick_name() {
        let payload = UserPayload::from(sample_user());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["nickname"], "testy");
        assert!(value.get("nick_name").is_none());
    }

    #[test]
    fn test_payload_escapes_free_text_fields() {
        let mut user = sample_user();
        user.full_name = "<script>alert(1)</script>".to_string();
        user.user_name = "evil<img src=x>".to_string();

        let payload = UserPayload::from(user);

        assert!(!payload.full_name.contains('<'));
        assert!(!payload.user_name.contains('<'));
        assert!(payload.full_name.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_payload_without_nickname() {
        let mut user = sample_user();
        user.nick_name = None;

        let payload = UserPayload::from(user);
        assert!(payload.nickname.is_none());
    }
}
