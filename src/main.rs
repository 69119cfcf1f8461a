// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::application::dashboard_loader::DashboardLoader;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::fixture_repository::FixtureRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    dismiss_promo, get_dashboard, health_check, reload_dashboard,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create repository (infrastructure layer); rejects a malformed dataset up front
    let repository = Arc::new(FixtureRepository::new()?);

    // Create the loader (application layer) and kick off the load cycle
    let loader = Arc::new(DashboardLoader::new(repository, config.loader));
    loader.activate();

    // Create application state
    let state = Arc::new(AppState { loader });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/reload", post(reload_dashboard))
        .route("/promo/dismiss", post(dismiss_promo))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.listen_addr.parse()?;
    tracing::info!("starting creator-analytics service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
