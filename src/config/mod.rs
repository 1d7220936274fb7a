// ABOUTME: Configuration module for the LiftLog server
// ABOUTME: Environment-variable driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server configuration

/// Environment-based configuration management
pub mod environment;

pub use environment::{DatabaseConfig, Environment, ServerConfig};
