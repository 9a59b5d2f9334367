use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use catalog_core::Failure;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::normalize::Raised;

/// JSON extractor that runs the payload's declarative constraints before
/// the handler sees it
///
/// Constraint violations are raised as a validation [`Failure`] for the
/// normalizer. Transport problems (malformed JSON, wrong content type)
/// keep axum's default rejection; they are not classified failures.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(request, state)
            .await
            .map_err(IntoResponse::into_response)?;

        value
            .validate()
            .map_err(|errors| Raised(Failure::from(errors)).into_response())?;

        Ok(Self(value))
    }
}
