// ABOUTME: HTTP middleware for CORS, request correlation, and panic recovery
// ABOUTME: Provides the layers wrapped around every route of the conversion API

/// Cross-origin resource sharing configuration
pub mod cors;
/// Conversion of handler panics into the generic 500 response
pub mod panic;
/// Request ID generation and propagation
pub mod request_id;

// CORS configuration
pub use cors::setup_cors;

// Panic recovery
pub use panic::handle_panic;

// Request correlation
pub use request_id::{request_id_middleware, RequestId};
