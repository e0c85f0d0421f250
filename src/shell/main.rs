use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use timer_sessions::shell::config::{AppConfig, StorageConfig};
use timer_sessions::shell::{build_state, http};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    match &config.storage {
        StorageConfig::InMemory => tracing::info!("using in-memory stores"),
        StorageConfig::Sqlite { path } => {
            tracing::info!(path = %path.display(), "using SQLite store")
        }
    }

    let state = build_state(&config).await?;
    let app = http::router(state);

    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
