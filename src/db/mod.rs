pub mod pool;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
  #[error("database error: {0}")]
  DatabaseError(String),
  #[error("{0}")]
  NotFound(String),
  #[error("{0}")]
  Conflict(String),
}

impl From<sqlx::Error> for RepositoryError {
  fn from(err: sqlx::Error) -> Self {
    match err {
      sqlx::Error::RowNotFound => RepositoryError::NotFound("Row not found".to_string()),
      sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
        RepositoryError::Conflict(db_err.message().to_string())
      }
      other => RepositoryError::DatabaseError(other.to_string()),
    }
  }
}
