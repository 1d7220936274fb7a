// ABOUTME: Route handlers for the workout record REST API
// ABOUTME: CRUD endpoints over logged workouts with date/exercise filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout record routes

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use liftlog_core::errors::AppError;
use liftlog_core::models::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutFilter};

use crate::server::ServerResources;

/// Workout routes handler
pub struct WorkoutsRoutes;

impl WorkoutsRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/workouts", get(Self::handle_list))
            .route("/api/workouts", post(Self::handle_create))
            .route("/api/workouts/:id", get(Self::handle_get))
            .route("/api/workouts/:id", put(Self::handle_update))
            .route("/api/workouts/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /api/workouts - list records, newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(filter): Query<WorkoutFilter>,
    ) -> Result<Response, AppError> {
        let workouts = resources.database.workouts().list(&filter).await?;
        Ok(Json(workouts).into_response())
    }

    /// Handle GET /api/workouts/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let workout = resources.database.workouts().get(id).await?;
        Ok(Json(workout).into_response())
    }

    /// Handle POST /api/workouts
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateWorkoutRequest>,
    ) -> Result<Response, AppError> {
        request.validate()?;
        let workout = resources.database.workouts().create(&request).await?;
        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    /// Handle PUT /api/workouts/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(request): Json<UpdateWorkoutRequest>,
    ) -> Result<Response, AppError> {
        request.validate()?;
        let workout = resources.database.workouts().update(id, &request).await?;
        Ok(Json(workout).into_response())
    }

    /// Handle DELETE /api/workouts/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        resources.database.workouts().delete(id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
