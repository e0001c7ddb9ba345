use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
  let pool = PgPoolOptions::new()
    .max_connections(max_connections)
    .acquire_timeout(Duration::from_secs(5))
    .connect(database_url)
    .await?;

  tracing::info!("Database pool created (max_connections = {})", max_connections);

  Ok(pool)
}

/// A pool that does not connect until first use.
pub fn create_lazy_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
  PgPoolOptions::new()
    .max_connections(max_connections)
    .acquire_timeout(Duration::from_secs(1))
    .connect_lazy(database_url)
}
