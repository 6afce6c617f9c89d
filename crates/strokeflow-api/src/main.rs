use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use strokeflow_api::config::ServiceConfig;
use strokeflow_api::router;
use strokeflow_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServiceConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let state = AppState::from_config(&config).await?;
    let app = router(state);

    let listener = TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
