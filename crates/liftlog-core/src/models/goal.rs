// ABOUTME: Goal entity with target weight/reps and one-way achieved state
// ABOUTME: Defines Goal and its create/update requests; completion is a separate action
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::exercise::MuscleGroup;
use crate::errors::{AppError, AppResult};

/// A strength goal for one exercise: reach `target_weight` for at least
/// `target_reps` repetitions
///
/// `achieved` is a flag set only by the explicit complete action. It is
/// intentionally decoupled from the computed progress percentage: progress may
/// reach 100% without the goal being marked achieved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique ID
    pub id: i64,
    /// Exercise this goal is for
    pub exercise_id: i64,
    /// Denormalized exercise name (populated on reads joined with exercises)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,
    /// Denormalized muscle group (populated on reads joined with exercises)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<MuscleGroup>,
    /// Target weight in kilograms
    pub target_weight: f64,
    /// Minimum repetitions for a set to count toward this goal
    pub target_reps: i64,
    /// Optional deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Whether the user marked this goal complete (one-way transition)
    pub achieved: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Request to create a new goal
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoalRequest {
    /// Exercise this goal is for
    pub exercise_id: i64,
    /// Target weight in kilograms
    pub target_weight: f64,
    /// Minimum repetitions for a set to count
    pub target_reps: i64,
    /// Optional deadline
    pub deadline: Option<NaiveDate>,
}

impl CreateGoalRequest {
    /// Validate request fields
    ///
    /// # Errors
    ///
    /// Returns an error if the target weight is negative or target reps below 1
    pub fn validate(&self) -> AppResult<()> {
        validate_targets(Some(self.target_weight), Some(self.target_reps))
    }
}

/// Request to update an existing goal's targets (partial)
///
/// The `achieved` flag cannot be changed here: the only exposed transition is
/// the explicit complete action, and it is one-way.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGoalRequest {
    /// New exercise (optional)
    pub exercise_id: Option<i64>,
    /// New target weight (optional)
    pub target_weight: Option<f64>,
    /// New target reps (optional)
    pub target_reps: Option<i64>,
    /// New deadline (optional)
    pub deadline: Option<NaiveDate>,
}

impl UpdateGoalRequest {
    /// Validate request fields
    ///
    /// # Errors
    ///
    /// Returns an error if no fields are present or targets are out of range
    pub fn validate(&self) -> AppResult<()> {
        if self.exercise_id.is_none()
            && self.target_weight.is_none()
            && self.target_reps.is_none()
            && self.deadline.is_none()
        {
            return Err(AppError::invalid_input("no fields to update"));
        }
        validate_targets(self.target_weight, self.target_reps)
    }
}

fn validate_targets(target_weight: Option<f64>, target_reps: Option<i64>) -> AppResult<()> {
    if target_weight.is_some_and(|w| !w.is_finite() || w < 0.0) {
        return Err(AppError::value_out_of_range(
            "target_weight must be a non-negative number",
        ));
    }
    if target_reps.is_some_and(|r| r < 1) {
        return Err(AppError::value_out_of_range(
            "target_reps must be at least 1",
        ));
    }
    Ok(())
}
