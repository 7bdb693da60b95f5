use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cats_api::config::Config;
use cats_api::db::Database;
use cats_api::store::postgres::{PgBreedStore, PgCatStore, PgUserStore};
use cats_api::{api, app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cats_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!("Configuration loaded successfully");

    // Initialize database connection
    let db = Database::connect(&config).await?;
    tracing::info!("Database connection established");

    // Run database migrations
    db.run_migrations().await?;

    // Build application state
    let state = AppState {
        users: Arc::new(PgUserStore::new(db.pool.clone())),
        cats: Arc::new(PgCatStore::new(db.pool.clone())),
        breeds: Arc::new(PgBreedStore::new(db.pool.clone())),
        policies: Arc::new(api::policies()),
        config: config.clone(),
    };

    let app = app(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
