use async_trait::async_trait;
use tokio::sync::OnceCell;
use validator::Validate;

use super::{
  model::{LoginRequest, LoginResponse, ProfileUpdateRequest, PublicUser, RegisterRequest, User},
  repository::UserRepository,
};
use crate::{
  db::RepositoryError,
  impl_service_error_conversions,
  utils::{
    hash_password,
    jwt::{Claims, JwtConfig},
    verify_password,
  },
};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
  #[error("Unauthorized: {0}")]
  Unauthorized(String),
  #[error("Validation Error: {0}")]
  ValidationError(String),
  #[error("Forbidden: {0}")]
  Forbidden(String),
  #[error("User Not Found: {0}")]
  UserNotFound(String),
  #[error("Internal Server Error: {0}")]
  InternalServerError(String),
}

impl_service_error_conversions!(UserServiceError, InternalServerError, UserNotFound, ValidationError);

#[async_trait]
pub trait UserService: Send + Sync {
  async fn register(&self, req: RegisterRequest) -> Result<User, UserServiceError>;
  async fn login(&self, req: LoginRequest) -> Result<LoginResponse, UserServiceError>;
  async fn update_profile(&self, claims: &Claims, req: ProfileUpdateRequest) -> Result<User, UserServiceError>;
}

/// Hashed once per service and checked when the email is unknown, so both
/// failed-login paths pay for a bcrypt verification.
const TIMING_DUMMY_PASSWORD: &str = "timing-dummy-password";

pub struct UserServiceImpl<U> {
  user_repository: U,
  jwt: JwtConfig,
  bcrypt_cost: u32,
  pub(super) dummy_hash: OnceCell<String>,
}

impl<U> UserServiceImpl<U>
where
  U: UserRepository,
{
  pub fn new(user_repository: U, jwt: JwtConfig, bcrypt_cost: u32) -> Self {
    Self {
      user_repository,
      jwt,
      bcrypt_cost,
      dummy_hash: OnceCell::new(),
    }
  }

  async fn burn_verification(&self, password: &str) -> Result<(), UserServiceError> {
    let dummy_hash = self
      .dummy_hash
      .get_or_try_init(|| hash_password(TIMING_DUMMY_PASSWORD, self.bcrypt_cost))
      .await
      .map_err(|e| UserServiceError::InternalServerError(format!("Failed to hash password: {}", e)))?;

    verify_password(password, dummy_hash)
      .await
      .map_err(|e| UserServiceError::InternalServerError(format!("Failed to verify password: {}", e)))?;
    Ok(())
  }
}

#[async_trait]
impl<U> UserService for UserServiceImpl<U>
where
  U: UserRepository,
{
  async fn register(&self, req: RegisterRequest) -> Result<User, UserServiceError> {
    req
      .validate()
      .map_err(|e| UserServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    let password_hash = hash_password(&req.password, self.bcrypt_cost)
      .await
      .map_err(|e| UserServiceError::InternalServerError(format!("Failed to hash password: {}", e)))?;

    let user = self
      .user_repository
      .create(&req.name, &req.email, &password_hash)
      .await
      .map_err(|e| match e {
        RepositoryError::Conflict(_) => UserServiceError::ValidationError("Email is already registered".to_string()),
        other => other.into(),
      })?;

    tracing::info!("Registered user {}", user.id);

    Ok(user)
  }

  async fn login(&self, req: LoginRequest) -> Result<LoginResponse, UserServiceError> {
    let user = match self.user_repository.find_by_email(&req.email).await? {
      Some(user) => user,
      None => {
        tracing::warn!("Login attempt for unknown email");
        self.burn_verification(&req.password).await?;
        return Err(UserServiceError::Unauthorized(INVALID_CREDENTIALS.to_string()));
      }
    };

    let password_matches = verify_password(&req.password, &user.password)
      .await
      .map_err(|e| UserServiceError::InternalServerError(format!("Failed to verify password: {}", e)))?;

    if !password_matches {
      tracing::warn!("Login attempt with wrong password for user {}", user.id);
      return Err(UserServiceError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let token = self
      .jwt
      .issue(user.id, &user.email)
      .map_err(|e| UserServiceError::InternalServerError(format!("JWT encoding failed: {}", e)))?;

    Ok(LoginResponse {
      message: "Login successful".to_string(),
      user: PublicUser {
        name: user.name,
        email: user.email,
      },
      token,
    })
  }

  async fn update_profile(&self, claims: &Claims, req: ProfileUpdateRequest) -> Result<User, UserServiceError> {
    req
      .validate()
      .map_err(|e| UserServiceError::ValidationError(format!("Validation failed: {}", e)))?;

    if let Some(email) = req.email.as_deref() {
      if email != claims.sub {
        return Err(UserServiceError::Forbidden(
          "Cannot update another user's profile".to_string(),
        ));
      }
    }

    self
      .user_repository
      .update_profile(&claims.sub, &req)
      .await?
      .ok_or_else(|| UserServiceError::UserNotFound("User not found".to_string()))
  }
}
