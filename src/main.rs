// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::insight_provider::select_insight_provider;
use crate::application::report_service::ReportService;
use crate::application::warehouse::Warehouse;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::sql_api_warehouse::SqlApiWarehouse;
use crate::infrastructure::sql_templates::DashboardQueries;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load dashboard configuration")?;

    // Create warehouse client (infrastructure layer)
    let settings = config.warehouse;
    let queries = DashboardQueries::new(
        &settings.database,
        &settings.schema,
        config.dashboard.window_days,
    );
    let warehouse: Arc<dyn Warehouse> = Arc::new(SqlApiWarehouse::new(
        settings.host,
        settings.token,
        settings.database,
        settings.schema,
        settings.warehouse,
        settings.role,
        settings.timeout_secs,
    )?);

    // Pick the AI capability once; handlers never re-check it
    let insights =
        select_insight_provider(config.ai.enabled, &config.ai.model, warehouse.clone()).await;

    // Create services (application layer)
    let report_service = ReportService::new(
        warehouse.clone(),
        insights,
        queries.problem_towers.clone(),
    );
    let dashboard_service = DashboardService::new(warehouse, queries, config.cache.ttl());

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        report_service,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
    tracing::info!("Starting executive dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
