use std::path::Path;

use tracing_subscriber::EnvFilter;

use sentirec_api::api::{create_router, AppState};
use sentirec_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // A failed artifact load leaves the server running in a degraded state
    // that reports the error on every call.
    let state = AppState::from_model_root(Path::new(&config.model_root));

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
