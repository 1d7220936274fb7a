// ABOUTME: Domain data models for the LiftLog workout tracking platform
// ABOUTME: Re-exports Exercise, Workout, Plan, Goal entities and derived statistics types
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain data models
//!
//! Persisted entities (Exercise, Workout, Plan, Goal) with their create/update
//! request types, and the derived statistics types produced by the stats
//! engine. Derived types are pure functions of the persisted set at
//! computation time and are never stored.

/// Exercise entity and the closed muscle group enumeration
pub mod exercise;

/// Goal entity and its one-way achieved state
pub mod goal;

/// Training plan entity with ordered plan exercises
pub mod plan;

/// Derived statistics types (never persisted)
pub mod stats;

/// Workout record entity
pub mod workout;

pub use exercise::{CreateExerciseRequest, Exercise, MuscleGroup, UpdateExerciseRequest};
pub use goal::{CreateGoalRequest, Goal, UpdateGoalRequest};
pub use plan::{CreatePlanExerciseRequest, CreatePlanRequest, Plan, PlanExercise, UpdatePlanRequest};
pub use stats::{
    DailyVolume, ExerciseStats, GoalProgress, GoalWithProgress, MuscleVolume, Period,
    PersonalRecord, VolumeStats, WorkoutHistory,
};
pub use workout::{CreateWorkoutRequest, UpdateWorkoutRequest, Workout, WorkoutFilter};
