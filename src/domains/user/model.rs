use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor, PgPool};
use validator::{Validate, ValidateUrl, ValidationError};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
  pub id: i32,
  pub name: String,
  pub email: String,
  #[serde(skip_serializing)]
  pub password: String,
  pub avatar: Option<String>,
  pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct RegisterRequest {
  #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
  pub name: String,
  #[validate(email(message = "Email address is invalid"))]
  pub email: String,
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LoginRequest {
  #[validate(length(min = 1, message = "Email is required"))]
  pub email: String,
  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicUser {
  pub name: String,
  pub email: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoginResponse {
  pub message: String,
  pub user: PublicUser,
  pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ProfileUpdateRequest {
  pub email: Option<String>,
  #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
  pub name: Option<String>,
  /// An empty string clears the avatar.
  #[validate(custom(function = "validate_avatar"))]
  pub avatar: Option<String>,
}

fn validate_avatar(avatar: &str) -> Result<(), ValidationError> {
  if avatar.is_empty() || avatar.validate_url() {
    return Ok(());
  }
  let mut err = ValidationError::new("url");
  err.message = Some("Avatar must be a valid URL".into());
  Err(err)
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProfileUser {
  pub name: String,
  pub email: String,
  pub avatar: Option<String>,
}

impl From<User> for ProfileUser {
  fn from(user: User) -> Self {
    Self {
      name: user.name,
      email: user.email,
      avatar: user.avatar,
    }
  }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileResponse {
  pub message: String,
  pub user: ProfileUser,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageResponse {
  pub message: String,
}

impl User {
  pub async fn create(db: &PgPool, name: &str, email: &str, password_hash: &str) -> Result<User, sqlx::Error> {
    Self::create_with_executor(db, name, email, password_hash).await
  }

  pub async fn create_with_executor<'e, E>(
    executor: E,
    name: &str,
    email: &str,
    password_hash: &str,
  ) -> Result<User, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, User>(
      r#"
        INSERT INTO users (name, email, password)
        VALUES ($1, $2, $3)
        RETURNING id, name, email, password, avatar, created_at
      "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(executor)
    .await
  }

  pub async fn find_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, User>(r#"SELECT id, name, email, password, avatar, created_at FROM users WHERE email = $1"#)
      .bind(email)
      .fetch_optional(executor)
      .await
  }

  /// Only fields that are `Some` change; an empty avatar is stored as NULL.
  pub async fn update_profile<'e, E>(
    executor: E,
    email: &str,
    name: Option<&str>,
    avatar: Option<&str>,
  ) -> Result<Option<User>, sqlx::Error>
  where
    E: PgExecutor<'e>,
  {
    sqlx::query_as::<_, User>(
      r#"
        UPDATE users
        SET name = COALESCE($2, name),
            avatar = CASE WHEN $3::TEXT IS NULL THEN avatar ELSE NULLIF($3, '') END,
            updated_at = NOW()
        WHERE email = $1
        RETURNING id, name, email, password, avatar, created_at
      "#,
    )
    .bind(email)
    .bind(name)
    .bind(avatar)
    .fetch_optional(executor)
    .await
  }
}
