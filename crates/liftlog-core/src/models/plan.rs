// ABOUTME: Training plan entity with ordered plan exercises
// ABOUTME: Defines Plan, PlanExercise, and plan create/update requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::exercise::MuscleGroup;
use crate::errors::{AppError, AppResult};

/// A named training plan composed of ordered exercise targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Unique ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Exercises in this plan, ordered by `order_index` (ties by insertion order)
    pub exercises: Vec<PlanExercise>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// One exercise entry within a plan with its set/rep targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanExercise {
    /// Unique ID
    pub id: i64,
    /// Plan this entry belongs to
    pub plan_id: i64,
    /// Exercise being planned
    pub exercise_id: i64,
    /// Denormalized exercise name (populated on reads joined with exercises)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,
    /// Denormalized muscle group (populated on reads joined with exercises)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<MuscleGroup>,
    /// Target number of sets
    pub target_sets: i64,
    /// Target repetitions per set
    pub target_reps: i64,
    /// Position within the plan (lower first)
    pub order_index: i64,
}

/// Request to create a new plan
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanRequest {
    /// Display name
    pub name: String,
    /// Free-form description (optional)
    #[serde(default)]
    pub description: String,
    /// Exercise entries (optional, may be empty)
    #[serde(default)]
    pub exercises: Vec<CreatePlanExerciseRequest>,
}

/// One exercise entry in a plan create/update request
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlanExerciseRequest {
    /// Exercise being planned
    pub exercise_id: i64,
    /// Target number of sets
    pub target_sets: i64,
    /// Target repetitions per set
    pub target_reps: i64,
    /// Position within the plan (optional, defaults to 0)
    #[serde(default)]
    pub order_index: i64,
}

impl CreatePlanRequest {
    /// Validate request fields
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or any entry has targets below 1
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("name must not be empty"));
        }
        for entry in &self.exercises {
            entry.validate()?;
        }
        Ok(())
    }
}

impl CreatePlanExerciseRequest {
    /// Validate entry fields
    ///
    /// # Errors
    ///
    /// Returns an error if targets are below 1
    pub fn validate(&self) -> AppResult<()> {
        if self.target_sets < 1 {
            return Err(AppError::value_out_of_range("target_sets must be at least 1"));
        }
        if self.target_reps < 1 {
            return Err(AppError::value_out_of_range("target_reps must be at least 1"));
        }
        Ok(())
    }
}

/// Request to update an existing plan
///
/// When `exercises` is present the stored entry list is replaced wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlanRequest {
    /// New display name (optional)
    pub name: Option<String>,
    /// New description (optional)
    pub description: Option<String>,
    /// Replacement exercise entries (optional)
    pub exercises: Option<Vec<CreatePlanExerciseRequest>>,
}

impl UpdatePlanRequest {
    /// Validate request fields
    ///
    /// # Errors
    ///
    /// Returns an error if no fields are present or any entry is invalid
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_none() && self.description.is_none() && self.exercises.is_none() {
            return Err(AppError::invalid_input("no fields to update"));
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(AppError::invalid_input("name must not be empty"));
            }
        }
        if let Some(entries) = &self.exercises {
            for entry in entries {
                entry.validate()?;
            }
        }
        Ok(())
    }
}
