use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use event_dashboard::modules::dashboard::adapters::outbound::backend_api_http::HttpBackendApi;
use event_dashboard::shell::config::DashboardConfig;
use event_dashboard::shell::graphql::GRAPHQL_PATH;
use event_dashboard::shell::http::router;
use event_dashboard::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = DashboardConfig::from_env()?;
    let backend = HttpBackendApi::new(config.backend_url.clone(), config.backend_timeout)?;
    let app = router(AppState::new(Arc::new(backend)));

    tracing::info!(backend = %config.backend_url, "dashboard backend");
    tracing::info!("GraphQL endpoint: http://{}{}", config.bind_addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
