// ABOUTME: Route handlers for the exercise catalog REST API
// ABOUTME: CRUD endpoints over exercises with optional muscle-group filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercise catalog routes

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;

use liftlog_core::errors::AppError;
use liftlog_core::models::{CreateExerciseRequest, MuscleGroup, UpdateExerciseRequest};

use crate::server::ServerResources;

/// Query parameters for listing exercises
#[derive(Debug, Default, Deserialize)]
pub struct ListExercisesQuery {
    /// Filter by muscle group
    pub muscle_group: Option<String>,
}

/// Exercise routes handler
pub struct ExercisesRoutes;

impl ExercisesRoutes {
    /// Create all exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/exercises", get(Self::handle_list))
            .route("/api/exercises", post(Self::handle_create))
            .route("/api/exercises/:id", get(Self::handle_get))
            .route("/api/exercises/:id", put(Self::handle_update))
            .route("/api/exercises/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /api/exercises - list the catalog
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListExercisesQuery>,
    ) -> Result<Response, AppError> {
        let filter = query
            .muscle_group
            .as_deref()
            .map(MuscleGroup::from_str)
            .transpose()?;
        let exercises = resources.database.exercises().list(filter).await?;
        Ok(Json(exercises).into_response())
    }

    /// Handle GET /api/exercises/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let exercise = resources.database.exercises().get(id).await?;
        Ok(Json(exercise).into_response())
    }

    /// Handle POST /api/exercises
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateExerciseRequest>,
    ) -> Result<Response, AppError> {
        request.validate()?;
        let exercise = resources.database.exercises().create(&request).await?;
        Ok((StatusCode::CREATED, Json(exercise)).into_response())
    }

    /// Handle PUT /api/exercises/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(request): Json<UpdateExerciseRequest>,
    ) -> Result<Response, AppError> {
        request.validate()?;
        let exercise = resources.database.exercises().update(id, &request).await?;
        Ok(Json(exercise).into_response())
    }

    /// Handle DELETE /api/exercises/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        resources.database.exercises().delete(id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
