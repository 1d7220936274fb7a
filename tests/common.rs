// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides database fixtures and an Axum request helper
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `liftlog`
//!
//! Common fixtures for the SQLite store and a small request builder for
//! exercising Axum routers without a running server.

use std::sync::{Arc, Once};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use liftlog::config::{DatabaseConfig, Environment, ServerConfig};
use liftlog::database::Database;
use liftlog::server::{self, ServerResources};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup: fresh in-memory store with the default
/// exercise catalog seeded
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

/// Configuration used for router-level tests
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
        },
        cors_origins: Vec::new(),
    }
}

/// Full application router over a fresh in-memory database
pub async fn create_test_app() -> (Router, Database) {
    let database = create_test_database().await;
    let resources = Arc::new(ServerResources::new(database.clone(), test_config()));
    (server::router(resources), database)
}

/// Helper to build and execute HTTP requests against Axum routers
pub struct TestRequest {
    method: Method,
    uri: String,
    body: Option<String>,
}

impl TestRequest {
    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn put(uri: &str) -> Self {
        Self::new(Method::PUT, uri)
    }

    pub fn delete(uri: &str) -> Self {
        Self::new(Method::DELETE, uri)
    }

    fn new(method: Method, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_owned(),
            body: None,
        }
    }

    /// Attach a JSON body
    pub fn json(mut self, data: &serde_json::Value) -> Self {
        self.body = Some(data.to_string());
        self
    }

    /// Execute the request against a router clone
    pub async fn send(self, app: &Router) -> TestResponse {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if self.body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        let request = builder
            .body(Body::from(self.body.unwrap_or_default()))
            .expect("Failed to build request");

        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body")
            .to_vec();
        TestResponse { status, body }
    }
}

/// Response captured from a router for assertions
pub struct TestResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl TestResponse {
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Parse the body as JSON, panicking with the raw body on failure
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "Response body is not JSON ({e}): {}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }
}
