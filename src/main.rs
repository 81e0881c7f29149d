use anyhow::Context;
use axum::Router;
use car_inventory_api::config::Config;
use car_inventory_api::constants::API_NAME;
use car_inventory_api::handlers::{car, health};
use car_inventory_api::repository::CarRepository;
use sqlx::sqlite::SqlitePoolOptions;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize configuration
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting car inventory server on port {}", API_NAME, config.server_port);

    // Create database connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("{} Connected to database", API_NAME);

    // Initialize repository and create the cars table if missing
    let repository = CarRepository::new(pool);
    repository
        .ensure_schema()
        .await
        .context("Failed to create database schema")?;

    // Build application router
    let app = Router::new()
        .nest("/cars", car::router())
        .merge(health::router())
        .layer(CorsLayer::permissive())
        .with_state(repository);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
