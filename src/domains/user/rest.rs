use axum::{
  extract::State,
  http::StatusCode,
  response::Json as JsonResponse,
  routing::{post, put, Router},
};

use super::model::{LoginRequest, LoginResponse, MessageResponse, ProfileResponse, ProfileUpdateRequest, RegisterRequest};
use crate::{
  middleware::auth::AuthUser,
  state::{AppState, SharedAppState},
  utils::json::ValidatedJson,
  AppError,
};

pub fn user_routes() -> Router<SharedAppState> {
  Router::new()
    .route("/register", post(register_handler))
    .route("/login", post(login_handler))
    .route("/profile", put(update_profile_handler))
}

pub async fn register_handler(
  State(state): State<SharedAppState>,
  ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, JsonResponse<MessageResponse>), AppError> {
  state.register(payload).await?;

  Ok((
    StatusCode::CREATED,
    JsonResponse(MessageResponse {
      message: "User registered!".to_string(),
    }),
  ))
}

pub async fn login_handler(
  State(state): State<SharedAppState>,
  ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<JsonResponse<LoginResponse>, AppError> {
  state.login(payload).await.map(JsonResponse).map_err(Into::into)
}

pub async fn update_profile_handler(
  State(state): State<SharedAppState>,
  AuthUser(claims): AuthUser,
  ValidatedJson(payload): ValidatedJson<ProfileUpdateRequest>,
) -> Result<JsonResponse<ProfileResponse>, AppError> {
  let user = state.update_profile(claims, payload).await?;

  Ok(JsonResponse(ProfileResponse {
    message: "Profile updated".to_string(),
    user: user.into(),
  }))
}
