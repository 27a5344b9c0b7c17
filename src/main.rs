// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use telemetry_viewer_charts::application::chart_service::ChartService;
use telemetry_viewer_charts::application::chart_store::ChartStore;
use telemetry_viewer_charts::infrastructure::config::load_viewer_config;
use telemetry_viewer_charts::infrastructure::insight_api_client::InsightApiClient;
use telemetry_viewer_charts::presentation::app_state::AppState;
use telemetry_viewer_charts::presentation::handlers::router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_viewer_config()?;

    // Create Insight API client (infrastructure layer)
    let source = Arc::new(InsightApiClient::new(&config.api)?);

    // Platform capabilities are fixed for the lifetime of the process
    let platform = config.platform.capabilities();
    tracing::info!("Preparing charts for the {} platform", platform.name());

    // Create services (application layer)
    let chart_service = ChartService::new(source, ChartStore::new(), platform, config.chart);

    let state = Arc::new(AppState { chart_service });

    // Build router (presentation layer)
    let app = router(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting telemetry-viewer-charts on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
