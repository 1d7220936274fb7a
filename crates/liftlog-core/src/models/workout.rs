// ABOUTME: Workout record entity with derived volume and list filtering
// ABOUTME: Defines Workout, its create/update requests, and the store list filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::exercise::MuscleGroup;
use crate::errors::{AppError, AppResult};

/// A single logged workout record: one exercise performed for a number of
/// sets at a given rep count and weight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique ID
    pub id: i64,
    /// Exercise this workout belongs to
    pub exercise_id: i64,
    /// Denormalized exercise name (populated on reads joined with exercises)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,
    /// Denormalized muscle group (populated on reads joined with exercises)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<MuscleGroup>,
    /// Date the workout was performed (ISO `YYYY-MM-DD`, no timezone)
    pub date: NaiveDate,
    /// Number of sets performed
    pub sets: i64,
    /// Repetitions per set
    pub reps: i64,
    /// Weight in kilograms
    pub weight: f64,
    /// Free-form notes
    pub notes: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Workout {
    /// Training volume for this record: `sets * reps * weight`
    ///
    /// Always derived, never stored.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets as f64 * self.reps as f64 * self.weight
    }
}

/// Request to create a new workout record
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkoutRequest {
    /// Exercise this workout belongs to
    pub exercise_id: i64,
    /// Date the workout was performed
    pub date: NaiveDate,
    /// Number of sets performed
    pub sets: i64,
    /// Repetitions per set
    pub reps: i64,
    /// Weight in kilograms
    pub weight: f64,
    /// Free-form notes (optional)
    #[serde(default)]
    pub notes: String,
}

impl CreateWorkoutRequest {
    /// Validate request fields
    ///
    /// # Errors
    ///
    /// Returns an error if sets/reps are below 1 or the weight is negative
    pub fn validate(&self) -> AppResult<()> {
        validate_numbers(Some(self.sets), Some(self.reps), Some(self.weight))
    }
}

/// Request to update an existing workout record (partial)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorkoutRequest {
    /// New exercise (optional)
    pub exercise_id: Option<i64>,
    /// New date (optional)
    pub date: Option<NaiveDate>,
    /// New set count (optional)
    pub sets: Option<i64>,
    /// New rep count (optional)
    pub reps: Option<i64>,
    /// New weight (optional)
    pub weight: Option<f64>,
    /// New notes (optional)
    pub notes: Option<String>,
}

impl UpdateWorkoutRequest {
    /// Validate request fields
    ///
    /// # Errors
    ///
    /// Returns an error if no fields are present or numeric fields are out of range
    pub fn validate(&self) -> AppResult<()> {
        if self.exercise_id.is_none()
            && self.date.is_none()
            && self.sets.is_none()
            && self.reps.is_none()
            && self.weight.is_none()
            && self.notes.is_none()
        {
            return Err(AppError::invalid_input("no fields to update"));
        }
        validate_numbers(self.sets, self.reps, self.weight)
    }
}

/// Optional filter for listing workouts from the store
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutFilter {
    /// Only workouts for this exercise
    pub exercise_id: Option<i64>,
    /// Only workouts on this exact date
    pub date: Option<NaiveDate>,
    /// Only workouts on or after this date
    pub start_date: Option<NaiveDate>,
    /// Only workouts on or before this date
    pub end_date: Option<NaiveDate>,
}

fn validate_numbers(sets: Option<i64>, reps: Option<i64>, weight: Option<f64>) -> AppResult<()> {
    if sets.is_some_and(|s| s < 1) {
        return Err(AppError::value_out_of_range("sets must be at least 1"));
    }
    if reps.is_some_and(|r| r < 1) {
        return Err(AppError::value_out_of_range("reps must be at least 1"));
    }
    if weight.is_some_and(|w| !w.is_finite() || w < 0.0) {
        return Err(AppError::value_out_of_range(
            "weight must be a non-negative number",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(sets: i64, reps: i64, weight: f64) -> CreateWorkoutRequest {
        CreateWorkoutRequest {
            exercise_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            sets,
            reps,
            weight,
            notes: String::new(),
        }
    }

    #[test]
    fn test_volume_is_derived() {
        let workout = Workout {
            id: 1,
            exercise_id: 1,
            exercise_name: None,
            muscle_group: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            sets: 3,
            reps: 10,
            weight: 50.0,
            notes: String::new(),
            created_at: Utc::now(),
        };
        assert!((workout.volume() - 1500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_create_request_validation() {
        assert!(request(3, 10, 50.0).validate().is_ok());
        assert!(request(0, 10, 50.0).validate().is_err());
        assert!(request(3, 0, 50.0).validate().is_err());
        assert!(request(3, 10, -1.0).validate().is_err());
        assert!(request(3, 10, f64::NAN).validate().is_err());
        // Bodyweight exercises log zero weight
        assert!(request(3, 10, 0.0).validate().is_ok());
    }
}
