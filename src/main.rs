//! Goal Tracker Backend
//!
//! REST backend for the team goal dashboard with SQLite persistence.

mod api;
mod config;
mod db;
mod errors;
mod models;
mod service;
mod stats;

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;
use service::GoalTrackerService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GoalTrackerService>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Goal Tracker Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let service = GoalTrackerService::new(Repository::new(pool));

    if config.seed_demo {
        db::seed_demo_team(service.repo()).await?;
    }

    let state = AppState {
        service: Arc::new(service),
    };

    // Build router
    let app = create_router(state, &config.cors_origins);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let api_routes = Router::new()
        .route("/dashboard", get(api::get_dashboard))
        // Members
        .route("/members", get(api::list_members))
        .route("/members/{id}/mood", patch(api::update_mood))
        // Goals
        .route("/goals", post(api::create_goal))
        .route("/goals/{id}", get(api::get_goal).delete(api::delete_goal))
        .route("/goals/{id}/toggle", patch(api::toggle_goal));

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the configured frontend origins, or any origin when none are set.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
