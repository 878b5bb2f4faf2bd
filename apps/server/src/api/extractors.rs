//! Custom Axum extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::Error;

/// Query-string extractor that deserializes into `T` and runs its
/// `validator` rules.
///
/// Malformed values (`limit=abc`, `offset=-1`) and rule violations are both
/// rejected with a `VALIDATION_ERROR` body.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}
