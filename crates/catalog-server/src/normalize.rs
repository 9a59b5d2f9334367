use axum::Json;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use catalog_core::{ApiError, Failure, INTERNAL_ERROR, INVALID_REQUEST, ValidationError};
use http::StatusCode;

/// Advisory message on every structural validation error body
const VALIDATION_MESSAGE: &str = "request data is missing required fields or contains invalid values";

/// A failure raised by the handler layer, in transit to the normalizer
///
/// Converting a [`Failure`] into a response does not serialize it; the
/// failure rides in the response extensions so it crosses intermediate
/// layers untouched and is translated exactly once, by
/// [`normalize_failures`].
#[derive(Debug, Clone)]
pub struct Raised(pub Failure);

impl From<Failure> for Raised {
    fn from(failure: Failure) -> Self {
        Self(failure)
    }
}

impl IntoResponse for Raised {
    fn into_response(self) -> Response {
        // Placeholder status; the normalizer replaces the whole response
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self.0);
        response
    }
}

/// Terminal error boundary for the handler layer
///
/// Captures the route identifier before dispatch, then translates any
/// propagated [`Failure`] into one of the two fixed error bodies.
/// Successful responses pass through untouched. The normalizer itself
/// never fails; exactly one translation happens per failed request.
pub async fn normalize_failures(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<Failure>() {
        None => response,
        Some(failure) => normalize(&failure, &path),
    }
}

/// Dispatch on failure kind; the `Internal` arm doubles as the default
/// case for anything the handler layer could not classify
pub(crate) fn normalize(failure: &Failure, path: &str) -> Response {
    let path = format!("uri={path}");

    match failure {
        Failure::InvalidRequest { message } => {
            tracing::error!(detail = ?failure, "{message}");
            let body = ApiError::new(INVALID_REQUEST, message.clone(), path);
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        Failure::Validation(validation) => {
            let mut body = ValidationError::new(path, VALIDATION_MESSAGE);
            // Field violations first, then object-level ones, so a shared
            // identifier ends up with the object-level message
            for violation in &validation.fields {
                body.add_error(&violation.name, &violation.message);
            }
            for violation in &validation.objects {
                body.add_error(&violation.name, &violation.message);
            }
            (StatusCode::BAD_REQUEST, Json(body)).into_response()
        }
        Failure::Internal { message } => {
            tracing::error!(detail = ?failure, "{message}");
            let body = ApiError::new(INTERNAL_ERROR, "internal server error", path);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
