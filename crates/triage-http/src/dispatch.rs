//! Error classification

use std::error::Error;

use axum::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use triage_core::{
    reason_phrase, DomainError, ErrorResponse, InvalidArgument, ValidationError, ValidationFailure,
};

/// Classify an error value into a status code and response body
///
/// Rules are checked in decreasing specificity; the first match wins:
///
/// 1. [`DomainError`] - its own status, trusted verbatim
/// 2. [`InvalidArgument`] - 400
/// 3. [`ValidationFailure`] - 400, message aggregates every field failure
/// 4. [`ValidationError`] - 400
/// 5. anything else - 500, message prefixed with
///    `"An unexpected error occurred: "`
///
/// The catch-all makes this total: every input yields exactly one response,
/// and the function itself never fails. It reads the clock and builds a
/// string; no logging, no shared state, safe to call concurrently.
///
/// Timestamps are RFC 3339 instants in every branch except the catch-all,
/// which stamps epoch milliseconds as a decimal string. Inherited client
/// contract; both formats are load-bearing for existing consumers.
pub fn dispatch(err: &(dyn Error + 'static)) -> (StatusCode, ErrorResponse) {
    if let Some(domain) = err.downcast_ref::<DomainError>() {
        let status = domain.status();
        let phrase = reason_phrase(status);
        let message = if domain.message().is_empty() {
            phrase
        } else {
            domain.message()
        };
        let response = ErrorResponse::new(phrase, message, status.as_u16(), iso_timestamp());
        return (status, response);
    }

    if let Some(arg) = err.downcast_ref::<InvalidArgument>() {
        return (
            StatusCode::BAD_REQUEST,
            bad_request_response(arg.to_string()),
        );
    }

    if let Some(failure) = err.downcast_ref::<ValidationFailure>() {
        return (
            StatusCode::BAD_REQUEST,
            bad_request_response(failure.to_string()),
        );
    }

    if let Some(validation) = err.downcast_ref::<ValidationError>() {
        return (
            StatusCode::BAD_REQUEST,
            bad_request_response(validation.to_string()),
        );
    }

    // Catch-all: epoch-millis timestamp, message wrapped with a generic prefix
    let response = ErrorResponse::new(
        "Internal Server Error",
        format!("An unexpected error occurred: {err}"),
        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        Utc::now().timestamp_millis().to_string(),
    );
    (StatusCode::INTERNAL_SERVER_ERROR, response)
}

fn bad_request_response(message: String) -> ErrorResponse {
    ErrorResponse::new(
        reason_phrase(StatusCode::BAD_REQUEST),
        message,
        StatusCode::BAD_REQUEST.as_u16(),
        iso_timestamp(),
    )
}

fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
