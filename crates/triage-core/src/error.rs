//! Domain errors carrying an explicit HTTP status

use http::StatusCode;
use thiserror::Error;

/// Boxed error type used for cause chaining
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Reason phrase for a status code
///
/// Falls back to `"Unknown Status"` for codes the IANA registry has no
/// canonical phrase for.
pub fn reason_phrase(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

/// An error the application explicitly flagged, carrying its target status
///
/// Unlike the other error shapes the dispatcher recognizes, a `DomainError`
/// needs no classification: the dispatcher trusts its status verbatim. It is
/// constructed at the point a business rule is violated, propagated up the
/// call stack unmodified, and consumed once at the boundary.
///
/// An error constructed without a status defaults to 500 - an error of
/// unspecified severity is never implicitly treated as a client error.
///
/// # Example
///
/// ```rust
/// use triage_core::DomainError;
///
/// fn find_user(id: u64) -> Result<(), DomainError> {
///     Err(DomainError::not_found(format!("User {id} not found")))
/// }
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DomainError {
    message: String,
    status: StatusCode,
    #[source]
    cause: Option<BoxError>,
}

impl DomainError {
    /// Create an error with an explicit message and status
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        DomainError {
            message: message.into(),
            status,
            cause: None,
        }
    }

    /// Create an error with a message, a wrapped cause, and a status
    ///
    /// The cause is kept for diagnostic chaining via [`std::error::Error::source`];
    /// it is never surfaced to the client.
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Into<BoxError>,
        status: StatusCode,
    ) -> Self {
        DomainError {
            message: message.into(),
            status,
            cause: Some(cause.into()),
        }
    }

    /// Create an error from a cause alone; the message defaults to the
    /// status's reason phrase
    pub fn from_cause(cause: impl Into<BoxError>, status: StatusCode) -> Self {
        DomainError {
            message: reason_phrase(status).to_string(),
            status,
            cause: Some(cause.into()),
        }
    }

    /// Create an error from a status alone; the message defaults to the
    /// status's reason phrase
    pub fn from_status(status: StatusCode) -> Self {
        DomainError {
            message: reason_phrase(status).to_string(),
            status,
            cause: None,
        }
    }

    // Named constructors for the common statuses

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND)
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    /// 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::UNAUTHORIZED)
    }

    /// 403 Forbidden
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::FORBIDDEN)
    }

    /// 409 Conflict
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::CONFLICT)
    }

    /// The status the response must carry
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The client-facing message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Message-only construction; status defaults to 500
impl From<String> for DomainError {
    fn from(message: String) -> Self {
        DomainError::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Message-only construction; status defaults to 500
impl From<&str> for DomainError {
    fn from(message: &str) -> Self {
        DomainError::new(message, StatusCode::INTERNAL_SERVER_ERROR)
    }
}
