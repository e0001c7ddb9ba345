use axum::{
  extract::{FromRequestParts, Path},
  http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::AppError;

/// `Path` that rejects with a JSON 400 [`AppError`] instead of axum's plain-text body.
#[derive(Debug, Clone, Copy)]
pub struct ValidPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidPath<T>
where
  T: DeserializeOwned + Send,
  S: Send + Sync,
{
  type Rejection = AppError;

  async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
    let Path(value) = Path::<T>::from_request_parts(parts, state)
      .await
      .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    Ok(ValidPath(value))
  }
}
