use anyhow::Result;
use mcare_backend::config::AppConfig;
use mcare_backend::{create_router, initialize_backend};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        error!("Backend failed to start: {:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run() -> Result<()> {
    let config = AppConfig::from_env()?;
    let state = initialize_backend(&config).await?;
    let app = create_router(state, &config)?;

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Backend server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
