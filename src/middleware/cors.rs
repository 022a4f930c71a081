// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for browser clients of the conversion API
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::environment::ServerConfig;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Configure CORS settings for the conversion server
///
/// Origins come from `CORS_ALLOWED_ORIGINS`. Methods and headers are never
/// restricted, so browser clients can call every endpoint.
///
/// # Examples
///
/// ```bash
/// # Allow all origins (default)
/// export CORS_ALLOWED_ORIGINS="*"
///
/// # Allow specific origins
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.cors.allowed_origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

fn allowed_origins(configured: &str) -> AllowOrigin {
    if configured.is_empty() || configured == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = configured
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                HeaderValue::from_str(trimmed).ok()
            }
        })
        .collect();

    if origins.is_empty() {
        // Fallback to any if parsing failed
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}
