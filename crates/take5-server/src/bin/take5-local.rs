//! Run the Take 5 API without Shuttle
//!
//! Configuration comes from the environment, with `.env` loaded first.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use take5_server::{build_app, config::AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🌿 Take 5 API initializing (local)...");

    let config = AppConfig::from_env()?;
    let router = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("🚀 Listening on http://{}", config.bind_addr);

    axum::serve(listener, router).await?;
    Ok(())
}
