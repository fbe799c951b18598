//! Boxed catch-type and middleware registration

use std::error::Error;

use axum::response::{IntoResponse, Response};
use axum::Json;
use triage_core::BoxError;

use crate::dispatch::dispatch;

/// Boxed error handlers return as their rejection type
///
/// Anything convertible into a boxed error converts into `CaughtError`, so
/// handlers can use `?` on domain errors, validation errors, and foreign
/// errors alike and the dispatcher picks the response:
///
/// ```ignore
/// async fn get_user(Path(id): Path<u64>) -> Result<Json<User>, CaughtError> {
///     let user = repo.find(id)?; // any error type
///     Ok(Json(user))
/// }
/// ```
pub struct CaughtError(pub BoxError);

impl<E> From<E> for CaughtError
where
    E: Into<BoxError>,
{
    fn from(err: E) -> Self {
        CaughtError(err.into())
    }
}

impl IntoResponse for CaughtError {
    fn into_response(self) -> Response {
        let err: &(dyn Error + 'static) = self.0.as_ref();
        let (status, body) = dispatch(err);
        tracing::debug!(status = status.as_u16(), error = %body.error, "translated handler error");
        (status, Json(body)).into_response()
    }
}

/// Adapter for `axum::error_handling::HandleErrorLayer`
///
/// Installed once at startup so errors escaping middleware (timeouts, body
/// limits) go through the same translation as handler errors:
///
/// ```ignore
/// let app = app
///     .layer(HandleErrorLayer::new(handle_middleware_error))
///     .layer(TimeoutLayer::new(Duration::from_secs(30)));
/// ```
pub async fn handle_middleware_error(err: BoxError) -> Response {
    CaughtError(err).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use triage_core::{DomainError, InvalidArgument, ValidationError};

    #[test]
    fn test_question_mark_conversion_from_any_error() {
        fn fallible() -> Result<(), CaughtError> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))?;
            Ok(())
        }
        let caught = fallible().unwrap_err();
        let err: &(dyn std::error::Error + 'static) = caught.0.as_ref();
        let (status, _) = dispatch(err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_boxed_domain_error_keeps_its_status() {
        let caught = CaughtError::from(DomainError::not_found("User 42 not found"));
        let response = caught.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_errors_convert_and_classify() {
        let caught = CaughtError::from(ValidationError("bad value".to_string()));
        assert_eq!(caught.into_response().status(), StatusCode::BAD_REQUEST);

        let caught = CaughtError::from(InvalidArgument("bad arg".to_string()));
        assert_eq!(caught.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_middleware_handler_translates_boxed_errors() {
        let err: BoxError = Box::new(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let response = handle_middleware_error(err).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
