//! Query-string extractor that rejects with the API's JSON error body
//! instead of axum's plain-text rejection.

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use error_location::ErrorLocation;
use serde::de::DeserializeOwned;

pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match Query::<T>::from_request_parts(parts, state).await {
                Ok(Query(value)) => Ok(ApiQuery(value)),
                Err(rejection) => {
                    log::debug!("Rejected query string {:?}: {}", parts.uri.query(), rejection);
                    Err(ApiError::BadRequest {
                        message: rejection.body_text(),
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
        }
    }
}
