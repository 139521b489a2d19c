//! Path extractor that reports bad parameters in the API envelope

use axum::{
    extract::{FromRequestParts, Path as AxumPath, rejection::PathRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Wrapper around `axum::extract::Path` whose rejections are [`ApiError`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Path<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumPath::<T>::from_request_parts(parts, state).await {
            Ok(AxumPath(value)) => Ok(Path(value)),
            Err(rejection) => Err(rejection_to_error(&rejection)),
        }
    }
}

fn rejection_to_error(rejection: &PathRejection) -> ApiError {
    let message = rejection.body_text();

    // A route/handler mismatch, not something the client sent
    if rejection.status().is_server_error() {
        return ApiError::internal(message);
    }

    ApiError::bad_request(message)
        .with_param("path")
        .with_code("invalid_path_param")
}
