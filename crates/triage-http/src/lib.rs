//! # Triage HTTP
//!
//! Axum integration for the triage error-translation layer.
//!
//! This crate provides:
//! - [`dispatch`], the classification engine mapping any error value to a
//!   `(StatusCode, ErrorResponse)` pair
//! - [`CaughtError`], a boxed catch-type handlers return so `?` works on
//!   any error
//! - [`handle_middleware_error`], an adapter for
//!   `axum::error_handling::HandleErrorLayer` so errors escaping middleware
//!   go through the same translation
//!
//! ## Handler example
//!
//! ```ignore
//! use axum::{routing::get, Json, Router};
//! use triage_core::DomainError;
//! use triage_http::CaughtError;
//!
//! async fn get_user() -> Result<Json<User>, CaughtError> {
//!     let user = lookup(42).ok_or_else(|| DomainError::not_found("User 42 not found"))?;
//!     Ok(Json(user))
//! }
//!
//! let app = Router::new().route("/users/42", get(get_user));
//! ```
//!
//! ## Middleware example
//!
//! ```ignore
//! use axum::error_handling::HandleErrorLayer;
//! use tower::timeout::TimeoutLayer;
//! use triage_http::handle_middleware_error;
//!
//! let app = app
//!     .layer(HandleErrorLayer::new(handle_middleware_error))
//!     .layer(TimeoutLayer::new(Duration::from_secs(30)));
//! ```

mod catch;
mod dispatch;

pub use catch::{handle_middleware_error, CaughtError};
pub use dispatch::dispatch;
