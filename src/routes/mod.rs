// ABOUTME: Route module organization for the LiftLog HTTP API
// ABOUTME: One module per domain; thin handlers delegating to store managers and the stats engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP routes
//!
//! Each domain module owns its route table and handler functions. Handlers
//! stay thin: validate, call the store manager or statistics engine, and wrap
//! the result. Errors flow out as [`liftlog_core::errors::AppError`] which
//! renders the standard error envelope.

/// Exercise catalog routes
pub mod exercises;
/// Goal routes including the one-way complete transition
pub mod goals;
/// Health and readiness routes
pub mod health;
/// Training plan routes
pub mod plans;
/// Derived statistics routes
pub mod stats;
/// Workout record routes
pub mod workouts;

pub use exercises::ExercisesRoutes;
pub use goals::GoalsRoutes;
pub use health::HealthRoutes;
pub use plans::PlansRoutes;
pub use stats::StatsRoutes;
pub use workouts::WorkoutsRoutes;
