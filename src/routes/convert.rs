// ABOUTME: Conversion route handlers for the fixed-factor unit conversion endpoints
// ABOUTME: Resolves the conversion slug, validates the JSON body, and returns the scaled result
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion routes
//!
//! `POST /api/convert/{slug}` for every entry of [`Conversion::ALL`].

use crate::constants::{messages, paths};
use crate::conversions::{convert, Conversion};
use crate::errors::{AppError, AppResult};
use crate::models::{ConversionRequest, ConversionResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tracing::debug;

/// Conversion routes implementation
pub struct ConversionRoutes;

impl ConversionRoutes {
    /// Create the conversion routes
    pub fn routes() -> Router {
        Router::new().route(
            &format!("{}/:conversion", paths::CONVERT_PREFIX),
            post(Self::handle_conversion),
        )
    }

    /// Run the named conversion
    ///
    /// A body that is not a JSON object with an `amount` field is reported the
    /// same way as a bad amount.
    async fn handle_conversion(
        Path(slug): Path<String>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> AppResult<Json<ConversionResponse>> {
        let conversion = Conversion::from_slug(&slug)
            .ok_or_else(|| AppError::not_found(messages::CONVERSION_NOT_FOUND))?;

        let Json(body) = body.map_err(|rejection| {
            debug!(conversion = %conversion, rejection = %rejection, "Unreadable conversion body");
            AppError::invalid_amount()
        })?;

        let request = ConversionRequest::from_body(body).ok_or_else(|| {
            debug!(conversion = %conversion, "Conversion body is not a JSON object");
            AppError::invalid_amount()
        })?;

        convert(conversion, &request).map(Json)
    }
}
