// ABOUTME: Environment-based server configuration for the conversion API
// ABOUTME: Parses bind host, port, environment label, and CORS settings with validation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration

use super::network::CorsConfig;
use crate::constants::defaults;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
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
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host the listener binds to
    pub host: IpAddr,
    /// HTTP port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `HOST` is not an IP address or the
    /// port variable is not a valid port number
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: parse_host(&env_var_or("HOST", defaults::HOST))?,
            http_port: parse_port()?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                defaults::ENVIRONMENT,
            )),
            cors: CorsConfig::from_env(),
        };

        Ok(config)
    }

    /// Socket address the server listens on
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Unit Conversion Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}",
            self.bind_addr(),
            self.environment,
            if self.cors.is_permissive() {
                "any"
            } else {
                self.cors.allowed_origins.as_str()
            },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_host(raw: &str) -> AppResult<IpAddr> {
    raw.trim().parse().map_err(|e| {
        AppError::config(format!("HOST must be an IP address, got '{raw}'")).with_source(e)
    })
}

/// `HTTP_PORT` wins over `PORT`, which is what most hosting platforms set
fn parse_port() -> AppResult<u16> {
    let Some((key, raw)) = ["HTTP_PORT", "PORT"]
        .into_iter()
        .find_map(|key| env::var(key).ok().map(|value| (key, value)))
    else {
        return Ok(defaults::HTTP_PORT);
    };

    raw.trim().parse().map_err(|e| {
        AppError::config(format!("{key} must be a port number, got '{raw}'")).with_source(e)
    })
}
