//! Job Scrape Proxy Server
//!
//! Exposes `/scrape` and `/health` using Axum.

use server::telemetry::init_tracing;
use server::{AppState, Config, create_router};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.json_logs);

    let scraper = config.backend.build()?;
    let app = create_router(AppState::new(scraper));

    let addr = config.addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        environment = %config.environment,
        backend = ?config.backend,
        "Server running"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
