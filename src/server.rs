// ABOUTME: HTTP server assembly: shared resources, router construction, and serving
// ABOUTME: Wires route modules together with CORS and request tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP server setup and lifecycle

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::database::Database;
use crate::routes::{
    ExercisesRoutes, GoalsRoutes, HealthRoutes, PlansRoutes, StatsRoutes, WorkoutsRoutes,
};

/// Shared resources handed to every route handler
pub struct ServerResources {
    /// SQLite record store
    pub database: Database,
    /// Loaded server configuration
    pub config: ServerConfig,
}

impl ServerResources {
    /// Bundle the database and configuration for handler state
    #[must_use]
    pub const fn new(database: Database, config: ServerConfig) -> Self {
        Self { database, config }
    }
}

/// Build the full application router over shared resources
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    let cors = cors_layer(&resources.config.cors_origins);

    Router::new()
        .merge(HealthRoutes::routes(resources.clone()))
        .merge(ExercisesRoutes::routes(resources.clone()))
        .merge(WorkoutsRoutes::routes(resources.clone()))
        .merge(PlansRoutes::routes(resources.clone()))
        .merge(GoalsRoutes::routes(resources.clone()))
        .merge(StatsRoutes::routes(resources))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Build a CORS layer from the configured origins, skipping invalid entries
fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().map_or_else(
                |_| {
                    warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                },
                Some,
            )
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE])
}

/// Run the HTTP server until the process is stopped
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// fails while running
pub async fn run(config: ServerConfig) -> Result<()> {
    let database = Database::new(&config.database.url)
        .await
        .context("Failed to initialize database")?;

    let addr = format!("0.0.0.0:{}", config.http_port);
    info!(config = %config.summary(), "server configuration loaded");

    let resources = Arc::new(ServerResources::new(database, config));
    let app = router(resources);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(address = %addr, "HTTP server listening");

    axum::serve(listener, app)
        .await
        .context("HTTP server failed")?;
    Ok(())
}
