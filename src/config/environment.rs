// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment-based configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment type for logging and other configuration defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL (e.g. `sqlite:data/liftlog.db` or `sqlite::memory:`)
    pub url: String,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database settings
    pub database: DatabaseConfig,
    /// Allowed CORS origins for the web frontend
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `HTTP_PORT`, `ENVIRONMENT`, `DATABASE_URL`,
    /// `CORS_ORIGINS` (comma-separated). Unset variables fall back to
    /// development defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `HTTP_PORT` is set but not a valid port number
    pub fn from_env() -> Result<Self> {
        let http_port = match env::var("HTTP_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("Invalid HTTP_PORT: {port}"))?,
            Err(_) => 8080,
        };

        let environment = Environment::from_str_or_default(
            &env::var("ENVIRONMENT").unwrap_or_default(),
        );

        let database = DatabaseConfig {
            url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:data/liftlog.db".into()),
        };

        let cors_origins = env::var("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|o| o.trim().to_owned())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| {
                vec![
                    "http://localhost:5173".into(),
                    "http://localhost:3000".into(),
                ]
            });

        Ok(Self {
            http_port,
            environment,
            database,
            cors_origins,
        })
    }

    /// One-line configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} environment={} database={} cors_origins={}",
            self.http_port,
            self.environment,
            self.database.url,
            self.cors_origins.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in ["HTTP_PORT", "ENVIRONMENT", "DATABASE_URL", "CORS_ORIGINS"] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.database.url, "sqlite:data/liftlog.db");
        assert_eq!(config.cors_origins.len(), 2);
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        env::set_var("HTTP_PORT", "9999");
        env::set_var("ENVIRONMENT", "production");
        env::set_var("CORS_ORIGINS", "https://liftlog.example, https://app.example");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 9999);
        assert!(config.environment.is_production());
        assert_eq!(
            config.cors_origins,
            vec!["https://liftlog.example", "https://app.example"]
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        env::set_var("HTTP_PORT", "not-a-port");
        assert!(ServerConfig::from_env().is_err());
        clear_env();
    }
}
