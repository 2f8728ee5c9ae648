//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;

use crate::application::services::{CafeService, CafeServiceImpl};
use crate::config::Settings;
use crate::domain::Catalog;
use crate::infrastructure::catalog_loader;
use crate::presentation::http::{handlers::health, routes};
use crate::presentation::middleware::{cors, logging};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub cafes: Arc<dyn CafeService>,
}

impl AppState {
    /// Build state around an already loaded catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            cafes: Arc::new(CafeServiceImpl::new(Arc::new(catalog))),
        }
    }
}

/// Build the router with its middleware stack
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(&settings.cors))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let catalog = catalog_loader::load_catalog(&settings.catalog)?;
        tracing::info!(cities = ?catalog.cities(), "Catalog ready");

        let router = build_router(AppState::new(catalog), &settings);

        let addr: SocketAddr = settings.server.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Bound to {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address; resolves the real port when configured with 0
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
