use axum::{
  extract::FromRequestParts,
  http::{request::Parts, HeaderMap},
};

use crate::state::SharedAppState;
use crate::utils::error::AppError;
use crate::utils::jwt::{Claims, JwtConfig};

pub fn auth_middleware(headers: &HeaderMap, jwt: &JwtConfig) -> Result<Claims, AppError> {
  let auth_header = headers
    .get(axum::http::header::AUTHORIZATION)
    .ok_or_else(|| AppError::unauthorized("Authorization header missing"))?
    .to_str()
    .map_err(|_| AppError::unauthorized("Invalid authorization header"))?;

  let token = auth_header
    .strip_prefix("Bearer ")
    .ok_or_else(|| AppError::unauthorized("Invalid authorization format"))?;

  let claims = jwt.verify(token).map_err(|_| AppError::unauthorized("Invalid token"))?;

  Ok(claims)
}

/// Verified caller identity taken from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<SharedAppState> for AuthUser {
  type Rejection = AppError;

  async fn from_request_parts(parts: &mut Parts, state: &SharedAppState) -> Result<Self, Self::Rejection> {
    auth_middleware(&parts.headers, &state.jwt).map(AuthUser)
  }
}
