// ABOUTME: API metadata route listing the service identity and every available endpoint
// ABOUTME: Builds the listing from the conversion catalogue so it never drifts from the router

use crate::constants::{messages, paths, service_names};
use crate::conversions::Conversion;
use crate::models::{ApiInfo, EndpointInfo};
use axum::routing::get;
use axum::{Json, Router};

/// API metadata routes implementation
pub struct InfoRoutes;

impl InfoRoutes {
    /// Create the `GET /` metadata route
    pub fn routes() -> Router {
        Router::new().route(paths::ROOT, get(|| async { Json(Self::api_info()) }))
    }

    /// Metadata describing the running service
    #[must_use]
    pub fn api_info() -> ApiInfo {
        let health = EndpointInfo {
            method: "GET".to_owned(),
            path: paths::HEALTH.to_owned(),
            description: "Estado del servidor".to_owned(),
        };

        let conversions = Conversion::ALL.into_iter().map(|conversion| EndpointInfo {
            method: "POST".to_owned(),
            path: conversion.path(),
            description: conversion.description().to_owned(),
        });

        ApiInfo {
            name: service_names::UNIT_CONVERSION_SERVER.to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            message: messages::API_DESCRIPTION.to_owned(),
            endpoints: std::iter::once(health).chain(conversions).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_includes_every_conversion() {
        let info = InfoRoutes::api_info();

        for conversion in Conversion::ALL {
            assert!(info
                .endpoints
                .iter()
                .any(|e| e.method == "POST" && e.path == conversion.path()));
        }
        assert_eq!(info.endpoints.len(), Conversion::ALL.len() + 1);
    }
}
