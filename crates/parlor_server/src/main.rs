//! Puzzle server binary.

use anyhow::Result;
use clap::Parser;
use parlor_server::{AppState, Cli, build_router};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,parlor_server=debug")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.resolve()?;
    info!(
        host = %config.host,
        port = config.port,
        mazes_dir = %config.mazes_dir.display(),
        static_dir = %config.static_dir.display(),
        "Starting puzzle server"
    );

    // Solve outputs land here; make sure the directory exists up front.
    std::fs::create_dir_all(&config.static_dir)?;

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState::new(config));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server ready at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
