use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use tcg_trade_api::app::create_app;
use tcg_trade_api::config::AppConfig;
use tcg_trade_api::db::pool::create_pool;
use tcg_trade_api::domains::matching::fixtures::load_candidates;
use tcg_trade_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  let config = AppConfig::from_env()?;

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
    .init();

  let pool = create_pool(&config.database_url, config.database_max_connections).await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  tracing::info!("Database migrations applied successfully");

  let candidates = load_candidates(config.match_fixtures_path.as_deref())?;
  let app_state = SharedAppState::new(pool, &config, candidates);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(&config.server_addr).await?;

  tracing::info!("Server running on http://{}", config.server_addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::error!("Failed to install Ctrl+C handler: {}", e);
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sigterm) => {
        sigterm.recv().await;
      }
      Err(e) => {
        tracing::error!("Failed to install SIGTERM handler: {}", e);
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
