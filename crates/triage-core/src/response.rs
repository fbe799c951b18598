//! The canonical error response shape

use serde::{Deserialize, Serialize};

/// Structured error body returned to clients
///
/// Serializes with fields in this exact order:
///
/// ```json
/// {
///   "error": "Not Found",
///   "message": "User 42 not found",
///   "status": 404,
///   "timestamp": "2024-05-01T12:00:00Z"
/// }
/// ```
///
/// This is a plain value object. It performs no validation; the dispatcher
/// is responsible for keeping `error` consistent with `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status: u16,
    pub timestamp: String,
}

impl ErrorResponse {
    /// Create a response from its four fields
    pub fn new(
        error: impl Into<String>,
        message: impl Into<String>,
        status: u16,
        timestamp: impl Into<String>,
    ) -> Self {
        ErrorResponse {
            error: error.into(),
            message: message.into(),
            status,
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_fields_in_wire_order() {
        let response = ErrorResponse::new(
            "Not Found",
            "User 42 not found",
            404,
            "2024-05-01T12:00:00Z",
        );

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"error":"Not Found","message":"User 42 not found","status":404,"timestamp":"2024-05-01T12:00:00Z"}"#
        );
    }

    #[test]
    fn test_round_trip() {
        let response = ErrorResponse::new("Conflict", "Version mismatch", 409, "1714564800000");
        let json = serde_json::to_string(&response).unwrap();
        let parsed: ErrorResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
