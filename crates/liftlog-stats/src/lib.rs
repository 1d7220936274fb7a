// ABOUTME: Statistics aggregation engine for the LiftLog platform
// ABOUTME: Pure derived-statistics computations over fetched workout data
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # LiftLog Stats
//!
//! Derived-statistics engine: per-exercise aggregates, rolling-window volume
//! series, personal records, and goal progress.
//!
//! Every function here is pure and synchronous. Inputs are immutable slices
//! of data already fetched from the store; outputs are complete new values.
//! There is no caching, no incremental recomputation, and no shared state, so
//! identical inputs always produce identical outputs and recomputation is
//! idempotent. The functions have no error path: degenerate inputs (missing
//! history, zero targets) produce well-defined zero/empty results.

/// Aggregation operations over workout and goal data
pub mod aggregator;

pub use aggregator::{exercise_stats, goal_progress, personal_records, volume_stats};
