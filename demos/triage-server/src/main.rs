//! Triage demo server
//!
//! A small axum service with the triage error-translation layer installed.
//! Every route fails in a different way; all of them come back as the same
//! structured JSON error shape.
//!
//! Usage:
//!   cargo run --package triage-server
//!
//! Then:
//!   curl -i http://localhost:8080/users/42
//!   curl -i http://localhost:8080/users/0
//!   curl -i -X POST http://localhost:8080/widgets
//!   curl -i http://localhost:8080/boom
//!   curl -i http://localhost:8080/slow

mod handlers;

use std::net::SocketAddr;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::routing::{get, post};
use axum::Router;
use tower::timeout::TimeoutLayer;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use triage_http::handle_middleware_error;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "triage_server=debug,triage_http=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build router; the error-handling layers are installed once here, at
    // startup - nothing else registers anything
    let app = Router::new()
        .route("/users/:id", get(handlers::get_user))
        .route("/widgets", post(handlers::create_widget))
        .route("/boom", get(handlers::boom))
        .route("/slow", get(handlers::slow))
        .route("/health", get(handlers::health))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(Duration::from_secs(2))),
        );

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], 8080));
    tracing::info!("triage demo server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
