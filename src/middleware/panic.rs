// ABOUTME: Panic recovery handler for tower-http CatchPanicLayer
// ABOUTME: Turns a panicking handler into the fixed conversion failure response

use crate::errors::AppError;
use axum::response::{IntoResponse, Response};
use std::any::Any;

/// Render a caught panic as a 500 with the generic conversion error body
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_owned()))
        .unwrap_or_else(|| "unknown panic payload".to_owned());

    AppError::internal(format!("handler panicked: {detail}")).into_response()
}
