//! # Thingful API Server
//!
//! A small CRUD REST API for users, things, and reviews, with basic-auth
//! protected endpoints backed by PostgreSQL.
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgres://localhost/thingful cargo run -p thingful-api
//! ```

use thingful_api::{
    app::{build_router, AppState},
    config::Config,
};
use thingful_shared::db::pool::create_pool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "thingful_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Thingful API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration and connect to the database
    let config = Config::from_env()?;
    let pool = create_pool(config.database_config()).await?;

    // Build the application
    let state = AppState::new(pool, config.clone());
    let app = build_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
