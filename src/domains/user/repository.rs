use async_trait::async_trait;
use sqlx::PgPool;

use super::model::{ProfileUpdateRequest, User};
use crate::db::RepositoryError;

#[async_trait]
pub trait UserRepository: Send + Sync {
  async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<User, RepositoryError>;
  async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
  async fn update_profile(&self, email: &str, changes: &ProfileUpdateRequest) -> Result<Option<User>, RepositoryError>;
}

pub struct SqlxUserRepository {
  pub pool: PgPool,
}

impl SqlxUserRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
  async fn create(&self, name: &str, email: &str, password_hash: &str) -> Result<User, RepositoryError> {
    Ok(User::create(&self.pool, name, email, password_hash).await?)
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
    Ok(User::find_by_email(&self.pool, email).await?)
  }

  async fn update_profile(&self, email: &str, changes: &ProfileUpdateRequest) -> Result<Option<User>, RepositoryError> {
    Ok(User::update_profile(&self.pool, email, changes.name.as_deref(), changes.avatar.as_deref()).await?)
  }
}
