// ABOUTME: Server binary for the LiftLog workout tracker backend
// ABOUTME: Loads configuration, initializes logging, and runs the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # LiftLog Server Binary
//!
//! Starts the LiftLog HTTP API: configuration comes from the environment with
//! optional command-line overrides for the port and database URL.

use anyhow::Result;
use clap::Parser;

use liftlog::{config::ServerConfig, logging, server};

#[derive(Parser)]
#[command(name = "liftlog-server")]
#[command(about = "LiftLog - workout tracking HTTP API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    logging::init_from_env()?;

    server::run(config).await
}
