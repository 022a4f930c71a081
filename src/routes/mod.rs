// ABOUTME: Route module organization for the conversion server HTTP endpoints
// ABOUTME: Provides route definitions for conversions, health checks, and API metadata
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module for the conversion server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to [`crate::conversions`].

/// Unit conversion routes
pub mod convert;
/// Health check routes
pub mod health;
/// API metadata listing
pub mod info;

/// Conversion route handlers
pub use convert::ConversionRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// API metadata route handlers
pub use info::InfoRoutes;
