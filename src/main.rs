use anyhow::Context;
use tracing_subscriber::EnvFilter;

use deepracer_reward::{config::ServerConfig, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cfg = ServerConfig::from_env()?;
    let addr = cfg.bind_addr;
    if cfg.log_rewards {
        tracing::info!("per-request reward logging enabled");
    }

    let app = server::router(cfg);

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
