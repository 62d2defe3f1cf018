/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use thingful_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = thingful_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use thingful_shared::auth::middleware::{basic_auth_middleware, AuthError};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The pool
/// is internally reference-counted, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                          # Health check (public)
/// └── /api/
///     ├── POST /users                  # Registration (public)
///     ├── GET  /users/:user_id         # (basic auth)
///     ├── GET  /things                 # (basic auth)
///     ├── POST /things                 # (basic auth)
///     ├── GET  /things/:thing_id       # (basic auth)
///     ├── GET  /things/:thing_id/reviews
///     ├── POST /reviews                # (basic auth)
///     └── GET  /reviews/:review_id     # (basic auth)
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Public routes: health check and registration
    let public_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/api/users", post(routes::users::register));

    // Everything else is gated by the basic auth middleware
    let protected_routes = Router::new()
        .route("/api/users/:user_id", get(routes::users::get_user))
        .route(
            "/api/things",
            get(routes::things::list_things).post(routes::things::create_thing),
        )
        .route("/api/things/:thing_id", get(routes::things::get_thing))
        .route(
            "/api/things/:thing_id/reviews",
            get(routes::things::list_thing_reviews),
        )
        .route("/api/reviews", post(routes::reviews::create_review))
        .route("/api/reviews/:review_id", get(routes::reviews::get_review))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            basic_auth_layer,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Basic authentication middleware layer
///
/// Thin wrapper that hands the pool to the shared middleware.
async fn basic_auth_layer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    basic_auth_middleware(state.db.clone(), req, next).await
}
