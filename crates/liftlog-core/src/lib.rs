// ABOUTME: Core types and errors for the LiftLog workout tracking platform
// ABOUTME: Foundation crate with domain models, derived-statistics types, and error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # LiftLog Core
//!
//! Foundation crate providing shared types for the LiftLog workout tracking
//! platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP responses
//! - **models**: Domain entities (Exercise, Workout, Plan, Goal) and derived statistics types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Domain data models (Exercise, Workout, Plan, Goal) and derived statistics types
pub mod models;
