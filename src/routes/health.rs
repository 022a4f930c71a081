// ABOUTME: Health check route handler for service monitoring
// ABOUTME: Answers load balancer and uptime probes with a fixed OK payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes for service monitoring

use crate::constants::{messages, paths};
use crate::models::HealthResponse;
use axum::routing::get;
use axum::{Json, Router};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        async fn health_handler() -> Json<HealthResponse> {
            Json(HealthResponse {
                status: "OK".to_owned(),
                message: messages::HEALTHY.to_owned(),
            })
        }

        Router::new().route(paths::HEALTH, get(health_handler))
    }
}
