// Main entry point for the resource directory server

use std::sync::Arc;

use anyhow::{Context, Result};
use directory_core::{
    domains::{auth::JwtService, resources::ResourceStore},
    kernel::{BaseLikeStore, InMemoryLikeStore, PostgresLikeStore},
    server::{build_app, AppState},
    Config,
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,directory_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Frontend Resources API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let store = ResourceStore::load(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", config.catalog_path))?;

    let likes: Arc<dyn BaseLikeStore> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connected");

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;
            tracing::info!("Migrations complete");

            Arc::new(PostgresLikeStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, likes are kept in memory");
            Arc::new(InMemoryLikeStore::new())
        }
    };

    let state = AppState {
        store,
        likes,
        jwt_service: Arc::new(JwtService::new(&config.jwt_secret, config.jwt_issuer.clone())),
        anonymous_sign_ins_enabled: config.anonymous_sign_ins_enabled,
    };

    // Build application
    let app = build_app(state, config.rate_limit_per_second)?;

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
