//! # Cafe Finder
//!
//! This is the application entry point that initializes:
//! - Configuration loading
//! - Tracing/logging subsystem
//! - Café catalog
//! - HTTP server

use anyhow::Result;
use tracing::info;

use cafe_finder::config::Settings;
use cafe_finder::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load()?;
    cafe_finder::telemetry::init_tracing(&settings.log);

    info!("Starting Cafe Finder...");
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        catalog = ?settings.catalog.path,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!(addr = %application.local_addr()?, "Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
