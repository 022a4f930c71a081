// ABOUTME: Server binary for the unit conversion API
// ABOUTME: Loads configuration, initializes logging, and serves until shutdown
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unit Conversion Server Binary
//!
//! Starts the HTTP conversion API using environment configuration, with
//! optional command-line overrides for the bind address.

use anyhow::Result;
use clap::Parser;
use std::net::IpAddr;
use tracing::{error, info};
use unit_conversion_server::{config::environment::ServerConfig, logging, server};

#[derive(Parser)]
#[command(name = "unit-conversion-server")]
#[command(about = "Unit Conversion API - fixed-factor conversions over HTTP")]
#[command(version)]
pub struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<IpAddr>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("{}", config.summary());

    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
