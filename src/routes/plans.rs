// ABOUTME: Route handlers for the training plan REST API
// ABOUTME: CRUD endpoints over plans with nested ordered exercise entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Training plan routes

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use liftlog_core::errors::AppError;
use liftlog_core::models::{CreatePlanRequest, UpdatePlanRequest};

use crate::server::ServerResources;

/// Plan routes handler
pub struct PlansRoutes;

impl PlansRoutes {
    /// Create all plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/plans", get(Self::handle_list))
            .route("/api/plans", post(Self::handle_create))
            .route("/api/plans/:id", get(Self::handle_get))
            .route("/api/plans/:id", put(Self::handle_update))
            .route("/api/plans/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /api/plans
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let plans = resources.database.plans().list().await?;
        Ok(Json(plans).into_response())
    }

    /// Handle GET /api/plans/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let plan = resources.database.plans().get(id).await?;
        Ok(Json(plan).into_response())
    }

    /// Handle POST /api/plans
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreatePlanRequest>,
    ) -> Result<Response, AppError> {
        request.validate()?;
        let plan = resources.database.plans().create(&request).await?;
        Ok((StatusCode::CREATED, Json(plan)).into_response())
    }

    /// Handle PUT /api/plans/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(request): Json<UpdatePlanRequest>,
    ) -> Result<Response, AppError> {
        request.validate()?;
        let plan = resources.database.plans().update(id, &request).await?;
        Ok(Json(plan).into_response())
    }

    /// Handle DELETE /api/plans/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        resources.database.plans().delete(id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
