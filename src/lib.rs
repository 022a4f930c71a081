// ABOUTME: Main library entry point for the unit conversion API
// ABOUTME: Exposes fixed-factor currency, length, mass, and speed conversions over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Unit Conversion Server
//!
//! A small stateless HTTP service that converts a single amount with a fixed
//! multiplier. Every conversion is a `POST` with a `{"amount": ...}` body.
//!
//! ## Endpoints
//!
//! - `POST /api/convert/cop-to-usd`: Colombian pesos to US dollars (stubbed rate)
//! - `POST /api/convert/meters-to-cm`: meters to centimeters
//! - `POST /api/convert/kg-to-lbs`: kilograms to pounds
//! - `POST /api/convert/kmh-to-mph`: km/h to mph
//! - `GET /api/health`: health probe
//! - `GET /`: API metadata listing
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use unit_conversion_server::config::environment::ServerConfig;
//! use unit_conversion_server::{logging, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     logging::init_from_env()?;
//!     let config = ServerConfig::from_env()?;
//!     server::run(config).await
//! }
//! ```

/// Configuration management from environment variables
pub mod config;
/// Application constants and configuration values
pub mod constants;
/// Conversion catalogue, amount validation, and rounding
pub mod conversions;
/// Unified error handling with HTTP response mapping
pub mod errors;
/// Production logging and structured output
pub mod logging;
/// HTTP middleware for CORS, request ids, and panic recovery
pub mod middleware;
/// Request and response payloads
pub mod models;
/// `HTTP` routes for conversions, health, and metadata
pub mod routes;
/// Router assembly and server lifecycle
pub mod server;
