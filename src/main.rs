//! Survey Insights server binary
//!
//! Loads the reference datasets once, then serves the read-only query API.

use std::error::Error;
use std::sync::Arc;

use survey_insights::adapters::http::app_router;
use survey_insights::adapters::{CsvReferenceLoader, InMemoryReferenceStore};
use survey_insights::application::StatusResolver;
use survey_insights::config::AppConfig;
use survey_insights::ports::ReferenceDataLoader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let loader = CsvReferenceLoader::new(&config.data.base_path);
    let data = loader.load().await?;
    let store = Arc::new(InMemoryReferenceStore::new(data));

    let statuses = StatusResolver::new(store.as_ref());
    if config.data.require_all_statuses {
        statuses.require_all()?;
    }

    let app = app_router(store, statuses, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Survey Insights listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}
