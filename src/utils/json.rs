//! JSON body extractor that deserializes and validates in one step.

use axum::{
  extract::{rejection::JsonRejection, FromRequest, Request},
  Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::error::AppError;

/// Rejects with a 400 [`AppError`] when the body is not valid JSON, does not
/// match `T`, or fails `T`'s validation rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
  T: DeserializeOwned + Validate,
  S: Send + Sync,
{
  type Rejection = AppError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let Json(value) = Json::<T>::from_request(req, state)
      .await
      .map_err(|rejection| AppError::bad_request(format_rejection_message(&rejection)))?;

    value.validate()?;

    Ok(ValidatedJson(value))
  }
}

fn format_rejection_message(rejection: &JsonRejection) -> String {
  match rejection {
    JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
    JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
    JsonRejection::MissingJsonContentType(_) => {
      "Missing Content-Type header. Expected 'application/json'.".to_string()
    }
    JsonRejection::BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
    _ => "Invalid JSON request".to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use axum::{body::Body, http::StatusCode};
  use serde::Deserialize;

  #[derive(Debug, Deserialize, Validate)]
  struct Payload {
    #[validate(length(min = 1))]
    name: String,
  }

  fn request(content_type: Option<&str>, body: &'static str) -> Request {
    let mut builder = axum::http::Request::builder().method("POST").uri("/");
    if let Some(content_type) = content_type {
      builder = builder.header("content-type", content_type);
    }
    builder.body(Body::from(body)).unwrap()
  }

  #[tokio::test]
  async fn test_accepts_valid_body() {
    let ValidatedJson(payload) =
      ValidatedJson::<Payload>::from_request(request(Some("application/json"), r#"{"name":"Ash"}"#), &())
        .await
        .unwrap();
    assert_eq!(payload.name, "Ash");
  }

  #[tokio::test]
  async fn test_rejects_missing_field() {
    let err = ValidatedJson::<Payload>::from_request(request(Some("application/json"), "{}"), &())
      .await
      .unwrap_err();
    assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
    assert!(err.message.starts_with("Invalid JSON data"));
  }

  #[tokio::test]
  async fn test_rejects_failed_validation() {
    let err = ValidatedJson::<Payload>::from_request(request(Some("application/json"), r#"{"name":""}"#), &())
      .await
      .unwrap_err();
    assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
    assert!(err.message.starts_with("Validation failed"));
  }

  #[tokio::test]
  async fn test_rejects_missing_content_type() {
    let err = ValidatedJson::<Payload>::from_request(request(None, r#"{"name":"Ash"}"#), &())
      .await
      .unwrap_err();
    assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
    assert!(err.message.contains("Content-Type"));
  }
}
