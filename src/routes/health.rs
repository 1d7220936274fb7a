// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness reports unconditionally; readiness verifies database connectivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health and readiness routes

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::server::ServerResources;

/// Health routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/health", get(Self::handle_health))
            .route("/api/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    /// Handle GET /api/health - liveness, no dependencies checked
    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }

    /// Handle GET /api/ready - readiness, verifies the database answers
    async fn handle_ready(State(resources): State<Arc<ServerResources>>) -> Response {
        let database_ok = sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(resources.database.pool())
            .await
            .is_ok();

        let status = if database_ok {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        let body = Json(serde_json::json!({
            "status": if database_ok { "ready" } else { "unavailable" },
            "database": database_ok,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));
        (status, body).into_response()
    }
}
