//! # Triage Core
//!
//! Core types for the triage error-translation layer.
//!
//! This crate provides:
//! - The canonical [`ErrorResponse`] wire shape returned to clients
//! - [`DomainError`], an error type carrying an explicit HTTP status
//! - Validation error types consumed by the dispatcher
//!
//! It is transport-agnostic: nothing here depends on axum, so domain code
//! can raise a [`DomainError`] without pulling in the HTTP layer.
//!
//! ## Example
//!
//! ```rust
//! use triage_core::DomainError;
//! use http::StatusCode;
//!
//! let err = DomainError::not_found("User 42 not found");
//! assert_eq!(err.status(), StatusCode::NOT_FOUND);
//! ```

pub mod error;
pub mod response;
pub mod validation;

// Re-exports for convenience
pub use error::*;
pub use response::*;
pub use validation::*;
