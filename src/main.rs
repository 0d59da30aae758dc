// Crypto tracker API server entry point

mod config;
mod db;
mod entity;
mod error;
mod handlers;
mod models;
mod seed;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, Router};
use http::{header, Method};
use migration::{Migrator, MigratorTrait};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::ApiConfig;
use db::DbPool;
use handlers::{
    create_favorite, create_portfolio_item, delete_favorite, delete_portfolio_item, get_asset,
    get_favorite, get_portfolio_item, health_check, list_assets, list_favorites, list_portfolio,
    update_favorite, update_portfolio_item,
};

fn load_env() {
    dotenv::dotenv().ok();
}

#[tokio::main]
async fn main() {
    load_env();
    // Configure logging with tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load API configuration from environment
    let config = ApiConfig::from_env();
    tracing::info!("Configuration loaded");

    // Establish database connection pool
    let db_pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Connected to database");

    // Bring the schema up to date
    Migrator::up(db_pool.get_connection(), None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Migrations applied");

    // Initialize data repositories
    let repositories = db_pool.repositories();

    // Populate the catalog on first run
    match seed::seed_assets_if_empty(&repositories.assets).await {
        Ok(true) => tracing::info!("Seeded asset catalog"),
        Ok(false) => tracing::info!("Asset catalog already populated"),
        Err(e) => tracing::warn!("Catalog seeding skipped: {}", e),
    }

    let app_state = Arc::new(repositories);

    // Configure CORS policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
            header::AUTHORIZATION,
        ])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600));

    // Set up API routes
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/assets", get(list_assets))
        .route("/assets/{asset_id}", get(get_asset))
        .route("/favorites", get(list_favorites).post(create_favorite))
        .route(
            "/favorites/{favorite_id}",
            get(get_favorite).put(update_favorite).delete(delete_favorite),
        )
        .route("/portfolio", get(list_portfolio).post(create_portfolio_item))
        .route(
            "/portfolio/{portfolio_item_id}",
            get(get_portfolio_item)
                .put(update_portfolio_item)
                .delete(delete_portfolio_item),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    // Parse server address from config
    let addr: SocketAddr = config.server_addr().parse().expect("Invalid address");

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
