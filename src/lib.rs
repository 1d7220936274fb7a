// ABOUTME: LiftLog server library: configuration, SQLite store, and REST routes
// ABOUTME: Assembles the Axum application around the pure statistics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # LiftLog Server
//!
//! HTTP backend for the LiftLog workout tracker: CRUD over exercises,
//! workouts, training plans, and goals, plus derived-statistics endpoints
//! backed by the pure [`liftlog_stats`] engine.
//!
//! The server is a thin shell: routes fetch an immutable snapshot through the
//! SQLite store managers and hand it to the stats engine; all aggregation is
//! synchronous and stateless.

/// Environment-based configuration management
pub mod config;

/// SQLite store: schema, seeding, and per-domain managers
pub mod database;

/// Logging configuration and structured logging setup
pub mod logging;

/// REST route handlers
pub mod routes;

/// Server assembly and shared resources
pub mod server;
