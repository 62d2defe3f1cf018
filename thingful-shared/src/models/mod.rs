/// Database models for Thingful
///
/// This module contains all database models and their SQL operations, plus
/// the payload types the API serializes back to clients.
///
/// # Models
///
/// - `user`: User accounts and credential storage
/// - `thing`: Things being reviewed
/// - `review`: Reviews linking users to things
///
/// # Example
///
/// ```no_run
/// use thingful_shared::models::user::{CreateUser, User};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let user = User::create(
///     &pool,
///     CreateUser {
///         full_name: "Test User".to_string(),
///         user_name: "test.user".to_string(),
///         nick_name: None,
///         password_hash: "$2b$12$...".to_string(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod review;
pub mod thing;
pub mod user;
