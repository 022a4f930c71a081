// ABOUTME: HTTP server assembly and lifecycle for the conversion API
// ABOUTME: Merges routes, applies middleware layers, binds the listener, and handles graceful shutdown
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Server assembly
//!
//! [`build_router`] is what integration tests drive directly; [`run`] adds the
//! TCP listener and signal handling around it.

use crate::config::environment::ServerConfig;
use crate::constants::messages;
use crate::conversions::Conversion;
use crate::errors::AppError;
use crate::middleware::{handle_panic, request_id_middleware, setup_cors};
use crate::routes::{ConversionRoutes, HealthRoutes, InfoRoutes};
use anyhow::Result;
use axum::middleware::from_fn;
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the application router with every route and middleware layer
///
/// Layer order, outermost first: request id, tracing, CORS, panic recovery.
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .merge(InfoRoutes::routes())
        .merge(HealthRoutes::routes())
        .merge(ConversionRoutes::routes())
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(setup_cors(config))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_id_middleware))
}

async fn route_not_found() -> AppError {
    AppError::not_found(messages::ROUTE_NOT_FOUND)
}

/// Bind the configured address and serve until Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = config.bind_addr();
    let router = build_router(&config);

    let listener = TcpListener::bind(addr).await?;
    info!(addr = %addr, "Unit conversion server listening");
    display_available_endpoints(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve once the process receives Ctrl+C or, on unix, SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C signal: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down gracefully"),
        () = terminate => info!("Received SIGTERM, shutting down gracefully"),
    }
}

/// Log every available endpoint
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_addr());

    info!("=== Available API Endpoints ===");
    info!("   API Info:          GET  {base}/");
    info!("   Health Check:      GET  {base}/api/health");
    for conversion in Conversion::ALL {
        info!("   Convert:           POST {base}{}", conversion.path());
    }
    info!("=== End of Endpoint List ===");
}
