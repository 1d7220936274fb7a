// ABOUTME: Exercise entity and the closed muscle group enumeration
// ABOUTME: Defines MuscleGroup parsing/display and exercise create/update requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Closed set of muscle groups used to categorize exercises
///
/// The set is fixed: volume aggregation groups by these six values and the
/// store rejects anything else at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    /// Chest exercises (bench press, flyes)
    Chest,
    /// Back exercises (deadlift, rows)
    Back,
    /// Shoulder exercises (overhead press, raises)
    Shoulders,
    /// Arm exercises (curls, extensions)
    Arms,
    /// Leg exercises (squat, leg press)
    Legs,
    /// Abdominal exercises (crunches, planks)
    Abs,
}

impl MuscleGroup {
    /// All muscle groups in canonical display order
    pub const ALL: [Self; 6] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Arms,
        Self::Legs,
        Self::Abs,
    ];

    /// Convert to the database/API string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Legs => "legs",
            Self::Abs => "abs",
        }
    }
}

impl std::str::FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s {
            "chest" => Ok(Self::Chest),
            "back" => Ok(Self::Back),
            "shoulders" => Ok(Self::Shoulders),
            "arms" => Ok(Self::Arms),
            "legs" => Ok(Self::Legs),
            "abs" => Ok(Self::Abs),
            other => Err(AppError::invalid_input(format!(
                "Invalid muscle group: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-defined exercise (e.g. "Bench Press", chest)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Muscle group this exercise targets
    pub muscle_group: MuscleGroup,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Request to create a new exercise
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExerciseRequest {
    /// Display name
    pub name: String,
    /// Muscle group this exercise targets
    pub muscle_group: MuscleGroup,
}

impl CreateExerciseRequest {
    /// Validate request fields
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::invalid_input("name must not be empty"));
        }
        Ok(())
    }
}

/// Request to update an existing exercise (partial)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExerciseRequest {
    /// New display name (optional)
    pub name: Option<String>,
    /// New muscle group (optional)
    pub muscle_group: Option<MuscleGroup>,
}

impl UpdateExerciseRequest {
    /// Validate request fields
    ///
    /// # Errors
    ///
    /// Returns an error if no fields are present or the name is empty
    pub fn validate(&self) -> AppResult<()> {
        if self.name.is_none() && self.muscle_group.is_none() {
            return Err(AppError::invalid_input("no fields to update"));
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(AppError::invalid_input("name must not be empty"));
            }
        }
        Ok(())
    }
}
