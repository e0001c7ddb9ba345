use anyhow::{ensure, Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub database_url: String,
  pub database_max_connections: u32,
  pub jwt_secret: String,
  pub jwt_ttl_hours: i64,
  pub server_addr: String,
  pub bcrypt_cost: u32,
  pub match_fixtures_path: Option<String>,
  pub log_level: String,
}

/// One year.
pub const MAX_JWT_TTL_HOURS: i64 = 8760;

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    let jwt_ttl_hours = parse_or("JWT_TTL_HOURS", 24)?;
    ensure!(
      (1..=MAX_JWT_TTL_HOURS).contains(&jwt_ttl_hours),
      "JWT_TTL_HOURS must be between 1 and {}, got {}",
      MAX_JWT_TTL_HOURS,
      jwt_ttl_hours
    );

    let bcrypt_cost = parse_or("BCRYPT_COST", crate::utils::DEFAULT_BCRYPT_COST)?;
    ensure!(
      crate::utils::BCRYPT_COST_RANGE.contains(&bcrypt_cost),
      "BCRYPT_COST must be between {} and {}, got {}",
      crate::utils::BCRYPT_COST_RANGE.start(),
      crate::utils::BCRYPT_COST_RANGE.end(),
      bcrypt_cost
    );

    Ok(Self {
      database_url: env::var("DATABASE_URL").context("DATABASE_URL environment variable must be set")?,
      database_max_connections: parse_or("DATABASE_MAX_CONNECTIONS", 5)?,
      jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET environment variable must be set")?,
      jwt_ttl_hours,
      server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".to_string()),
      bcrypt_cost,
      match_fixtures_path: env::var("MATCH_FIXTURES_PATH").ok().filter(|p| !p.is_empty()),
      log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
    })
  }
}

fn parse_or<T>(key: &str, default: T) -> Result<T>
where
  T: std::str::FromStr,
  T::Err: std::error::Error + Send + Sync + 'static,
{
  match env::var(key) {
    Ok(raw) => raw
      .trim()
      .parse()
      .with_context(|| format!("{} must be a valid number, got {:?}", key, raw)),
    Err(_) => Ok(default),
  }
}
