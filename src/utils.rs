pub mod error;
pub mod json;
pub mod jwt;
pub mod path;

pub const DEFAULT_BCRYPT_COST: u32 = 10;
/// Costs the bcrypt crate accepts.
pub const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

#[derive(Debug, thiserror::Error)]
pub enum PasswordHashError {
  #[error("bcrypt failure: {0}")]
  Bcrypt(#[from] bcrypt::BcryptError),
  #[error("hashing task failed: {0}")]
  Join(#[from] tokio::task::JoinError),
}

/// Hashes on the blocking pool; bcrypt is deliberately slow.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, PasswordHashError> {
  let password = password.to_owned();
  let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
  Ok(hashed)
}

pub async fn verify_password(password: &str, hashed: &str) -> Result<bool, PasswordHashError> {
  let password = password.to_owned();
  let hashed = hashed.to_owned();
  let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hashed)).await??;
  Ok(matches)
}
