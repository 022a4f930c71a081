// ABOUTME: Configuration management module for server settings loaded from the environment
// ABOUTME: Groups bind address, environment label, and CORS configuration
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration module for the conversion server
//!
//! - **Environment**: server configuration from environment variables
//! - **Network**: CORS origin settings

/// Environment and server configuration
pub mod environment;
/// Network-facing configuration (CORS)
pub mod network;

pub use environment::{Environment, ServerConfig};
pub use network::CorsConfig;
