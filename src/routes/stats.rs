// ABOUTME: Route handlers for derived statistics endpoints
// ABOUTME: Thin wrappers loading store data and delegating to the stats engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Statistics routes
//!
//! These handlers only load data and delegate to the pure aggregation
//! functions in `liftlog-stats`. The engine itself never fails; the 404 for
//! an unknown exercise ID is store policy applied before aggregation.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use liftlog_core::errors::AppError;
use liftlog_core::models::{Period, WorkoutFilter};
use liftlog_stats::{exercise_stats, personal_records, volume_stats};

use crate::server::ServerResources;

/// Query parameters for the volume endpoint
#[derive(Debug, Default, Deserialize)]
pub struct VolumeQuery {
    /// Window name (`week`, `month`, `year`); unknown values fall back to week
    pub period: Option<String>,
}

/// Statistics routes handler
pub struct StatsRoutes;

impl StatsRoutes {
    /// Create all statistics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/stats/exercise/:id", get(Self::handle_exercise_stats))
            .route("/api/stats/volume", get(Self::handle_volume))
            .route("/api/stats/records", get(Self::handle_records))
            .with_state(resources)
    }

    /// Handle GET /api/stats/exercise/:id - full stats for one exercise
    async fn handle_exercise_stats(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let exercise = resources.database.exercises().get(id).await?;
        let workouts = resources
            .database
            .workouts()
            .list(&WorkoutFilter {
                exercise_id: Some(id),
                ..WorkoutFilter::default()
            })
            .await?;
        let stats = exercise_stats(&exercise, &workouts);
        Ok(Json(stats).into_response())
    }

    /// Handle GET /api/stats/volume?period= - rolling-window volume ending today
    async fn handle_volume(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<VolumeQuery>,
    ) -> Result<Response, AppError> {
        let period = Period::from_str_or_default(query.period.as_deref().unwrap_or(""));
        let reference = chrono::Utc::now().date_naive();

        let exercises = resources.database.exercises().list(None).await?;
        let workouts = resources
            .database
            .workouts()
            .list(&WorkoutFilter::default())
            .await?;

        let stats = volume_stats(period, reference, &exercises, &workouts);
        Ok(Json(stats).into_response())
    }

    /// Handle GET /api/stats/records - personal records sorted for display
    async fn handle_records(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let exercises = resources.database.exercises().list(None).await?;
        let workouts = resources
            .database
            .workouts()
            .list(&WorkoutFilter::default())
            .await?;

        let mut records = personal_records(&exercises, &workouts);
        records.sort_by(|a, b| {
            a.muscle_group
                .as_str()
                .cmp(b.muscle_group.as_str())
                .then_with(|| a.exercise_name.cmp(&b.exercise_name))
        });
        Ok(Json(records).into_response())
    }
}
