//! Salary ledger HTTP service.

use anyhow::{Context, Result};
use tracing::info;

use salary_ledger::api::{AppState, create_router};
use salary_ledger::config::{AppConfig, ConfigLoader};
use salary_ledger::store::InMemorySalaryStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ConfigLoader::from_env()
        .context("Failed to load configuration")?
        .into_config();

    init_logging(&config.logging.level)?;

    serve(config).await
}

/// Initialize tracing subscriber for logging
fn init_logging(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Failed to create log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    Ok(())
}

async fn serve(config: AppConfig) -> Result<()> {
    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(
        address = %address,
        currency_symbol = %config.display.currency_symbol,
        "Salary ledger listening"
    );

    let router = create_router(AppState::new(InMemorySalaryStore::new(), config));
    axum::serve(listener, router)
        .await
        .context("Server terminated unexpectedly")
}
