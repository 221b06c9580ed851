//! AgriPool Server
//!
//! Crop advisory, fertilizer planning and transport matching for the AgriPool
//! farmer marketplace. Computations live in the `shared` crate; this server
//! exposes them over JSON.

use anyhow::Context;
use axum::{routing::get, Router};
use shared::AgronomyTables;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Reference tables, read-only after startup
    pub tables: Arc<AgronomyTables>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    // Initialize tracing
    let json = config.logging.json;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agripool_server=debug,tower_http=debug".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting AgriPool Server");
    tracing::info!("Environment: {}", config.environment);

    let tables = load_tables(&config)?;

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        tables: Arc::new(tables),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let host: std::net::IpAddr = config
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server.host '{}'", config.server.host))?;
    let addr = SocketAddr::from((host, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Built-in tables, or the JSON document named by `reference.tables_path`
fn load_tables(config: &Config) -> anyhow::Result<AgronomyTables> {
    match &config.reference.tables_path {
        Some(path) => {
            tracing::info!("Loading reference tables from {}", path);
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading reference tables from {}", path))?;
            let tables = AgronomyTables::from_json(&json)
                .map_err(|e| error::AppError::Configuration(e.to_string()))?;
            Ok(tables)
        }
        None => Ok(AgronomyTables::default()),
    }
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriPool API v1"
}
