// ABOUTME: Route handlers for the strength goal REST API
// ABOUTME: CRUD plus the one-way complete action; listing merges computed progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goal routes
//!
//! Listing returns each goal merged with its computed progress. Progress is
//! derived on every request and never stored; the `achieved` flag only moves
//! through the complete action.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use liftlog_core::errors::AppError;
use liftlog_core::models::{
    CreateGoalRequest, GoalWithProgress, UpdateGoalRequest, WorkoutFilter,
};
use liftlog_stats::goal_progress;

use crate::server::ServerResources;

/// Goal routes handler
pub struct GoalsRoutes;

impl GoalsRoutes {
    /// Create all goal routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/goals", get(Self::handle_list))
            .route("/api/goals", post(Self::handle_create))
            .route("/api/goals/:id", get(Self::handle_get))
            .route("/api/goals/:id", put(Self::handle_update))
            .route("/api/goals/:id", delete(Self::handle_delete))
            .route("/api/goals/:id/complete", post(Self::handle_complete))
            .with_state(resources)
    }

    /// Handle GET /api/goals - list goals merged with raw (unclamped) progress
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let goals = resources.database.goals().list().await?;
        let workouts = resources
            .database
            .workouts()
            .list(&WorkoutFilter::default())
            .await?;

        let merged: Vec<GoalWithProgress> = goals
            .into_iter()
            .map(|goal| {
                let progress = goal_progress(&goal, &workouts);
                GoalWithProgress::new(goal, progress)
            })
            .collect();
        Ok(Json(merged).into_response())
    }

    /// Handle GET /api/goals/:id - one goal merged with its progress
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let goal = resources.database.goals().get(id).await?;
        let workouts = resources
            .database
            .workouts()
            .list(&WorkoutFilter {
                exercise_id: Some(goal.exercise_id),
                ..WorkoutFilter::default()
            })
            .await?;
        let progress = goal_progress(&goal, &workouts);
        Ok(Json(GoalWithProgress::new(goal, progress)).into_response())
    }

    /// Handle POST /api/goals
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<CreateGoalRequest>,
    ) -> Result<Response, AppError> {
        request.validate()?;
        let goal = resources.database.goals().create(&request).await?;
        Ok((StatusCode::CREATED, Json(goal)).into_response())
    }

    /// Handle PUT /api/goals/:id - targets and deadline only
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Json(request): Json<UpdateGoalRequest>,
    ) -> Result<Response, AppError> {
        request.validate()?;
        let goal = resources.database.goals().update(id, &request).await?;
        Ok(Json(goal).into_response())
    }

    /// Handle POST /api/goals/:id/complete - mark achieved (one-way)
    async fn handle_complete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let goal = resources.database.goals().complete(id).await?;
        Ok(Json(goal).into_response())
    }

    /// Handle DELETE /api/goals/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        resources.database.goals().delete(id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
