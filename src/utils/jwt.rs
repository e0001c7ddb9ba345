use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
  pub sub: String,
  pub exp: usize,
  pub user_id: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
  #[error("token lifetime of {0} hours is out of range")]
  LifetimeOutOfRange(i64),
  #[error(transparent)]
  Jwt(#[from] jsonwebtoken::errors::Error),
}

#[derive(Clone)]
pub struct JwtConfig {
  secret: String,
  ttl_hours: i64,
}

impl JwtConfig {
  pub fn new(secret: impl Into<String>, ttl_hours: i64) -> Self {
    Self {
      secret: secret.into(),
      ttl_hours,
    }
  }

  pub fn issue(&self, user_id: i32, email: &str) -> Result<String, TokenError> {
    let out_of_range = || TokenError::LifetimeOutOfRange(self.ttl_hours);
    let expires_at = Duration::try_hours(self.ttl_hours)
      .filter(|ttl| *ttl > Duration::zero())
      .and_then(|ttl| Utc::now().checked_add_signed(ttl))
      .ok_or_else(out_of_range)?;
    let exp = usize::try_from(expires_at.timestamp()).map_err(|_| out_of_range())?;

    let claims = Claims {
      sub: email.to_string(),
      exp,
      user_id,
    };
    Ok(encode_jwt(&claims, &self.secret)?)
  }

  pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode_jwt(token, &self.secret)
  }
}

impl std::fmt::Debug for JwtConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JwtConfig")
      .field("secret", &"<redacted>")
      .field("ttl_hours", &self.ttl_hours)
      .finish()
  }
}

pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
  let token_data = decode::<Claims>(
    token,
    &DecodingKey::from_secret(secret.as_ref()),
    &Validation::default(),
  )?;

  Ok(token_data.claims)
}

pub fn encode_jwt(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
  encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_ref()))
}
