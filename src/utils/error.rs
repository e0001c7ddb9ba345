use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn unauthorized(message: impl Into<String>) -> Self {
    Self::new(StatusCode::UNAUTHORIZED, message)
  }

  pub fn not_found(message: impl Into<String>) -> Self {
    Self::new(StatusCode::NOT_FOUND, message)
  }

  pub fn forbidden(message: impl Into<String>) -> Self {
    Self::new(StatusCode::FORBIDDEN, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<AppError> for StatusCode {
  fn from(err: AppError) -> Self {
    err.status_code
  }
}

impl From<validator::ValidationErrors> for AppError {
  fn from(errors: validator::ValidationErrors) -> Self {
    AppError::bad_request(format!("Validation failed: {}", errors))
  }
}

impl From<crate::domains::user::service::UserServiceError> for AppError {
  fn from(error: crate::domains::user::service::UserServiceError) -> Self {
    use crate::domains::user::service::UserServiceError;
    match error {
      UserServiceError::ValidationError(msg) => AppError::bad_request(msg),
      UserServiceError::Unauthorized(msg) => AppError::unauthorized(msg),
      UserServiceError::Forbidden(msg) => AppError::forbidden(msg),
      UserServiceError::UserNotFound(msg) => AppError::not_found(msg),
      UserServiceError::InternalServerError(msg) => {
        tracing::error!("User service failure: {}", msg);
        AppError::internal_server_error("Internal server error")
      }
    }
  }
}

impl From<crate::domains::card::service::CardServiceError> for AppError {
  fn from(error: crate::domains::card::service::CardServiceError) -> Self {
    use crate::domains::card::service::CardServiceError;
    match error {
      CardServiceError::BadRequest(msg) => AppError::bad_request(msg),
      CardServiceError::NotFound(msg) => AppError::not_found(msg),
      CardServiceError::InternalServerError(msg) => {
        tracing::error!("Card service failure: {}", msg);
        AppError::internal_server_error("Internal server error")
      }
    }
  }
}
