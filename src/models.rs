// ABOUTME: Request and response payload types for the conversion HTTP API
// ABOUTME: Defines conversion, health, and API metadata JSON shapes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Data models for the conversion API
//!
//! Nothing here is persisted; every type is a transient JSON payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body accepted by every conversion endpoint
///
/// `amount` stays untyped so that missing, `null`, string, and other
/// non-numeric values are all reported with the same validation error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Quantity to convert
    #[serde(default)]
    pub amount: Option<Value>,
}

impl ConversionRequest {
    /// Read a request from a decoded JSON body
    ///
    /// Only an object carries an `amount`; any other JSON value yields `None`.
    #[must_use]
    pub fn from_body(body: Value) -> Option<Self> {
        match body {
            Value::Object(mut fields) => Some(Self {
                amount: fields.remove("amount"),
            }),
            _ => None,
        }
    }

    /// Build a request from a numeric amount
    #[must_use]
    pub fn from_amount(amount: f64) -> Self {
        Self {
            amount: Some(Value::from(amount)),
        }
    }
}

/// Successful conversion result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResponse {
    /// Source unit label
    pub from: String,
    /// Target unit label
    pub to: String,
    /// Validated input amount
    pub amount: f64,
    /// Converted value
    pub result: f64,
    /// Factor applied, only reported for currency conversions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `OK` while the server is answering
    pub status: String,
    /// Human-readable status message
    pub message: String,
}

/// One entry of the API metadata listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointInfo {
    /// HTTP method
    pub method: String,
    /// Route path
    pub path: String,
    /// What the endpoint does
    pub description: String,
}

/// API metadata returned from `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Short description of the API
    pub message: String,
    /// Every route the server answers
    pub endpoints: Vec<EndpointInfo>,
}
