//! `catalog-server` binary.
//!
//! Reads the layered settings, picks the storage backend named by
//! `storage.backend`, and serves the category and product API until
//! SIGINT or SIGTERM.

use anyhow::Result;
use tracing::info;

use catalog_server::config::Settings;
use catalog_server::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    catalog_server::telemetry::init_tracing();

    let settings = Settings::load()?;
    info!(
        addr = %settings.server_addr(),
        environment = %settings.environment,
        backend = ?settings.storage.backend,
        default_page_size = settings.pagination.default_size,
        "Catalog settings loaded"
    );

    let application = Application::build(settings).await?;
    application.run_until_stopped().await?;

    Ok(())
}
