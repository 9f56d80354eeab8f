//! Player summary HTTP server binary.
//!
//! Loads configuration, imports the dataset (if one is configured) into the
//! in-memory repository, and serves the REST API.
//!
//! # Usage
//!
//! ```bash
//! DATA_DIR=raw_data cargo run --bin player-summary-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `PIXELS_PER_FOOT`: Shot chart scale (default: 10)
//! - `DATA_DIR`: Dataset directory with teams.json, players.json and games.json
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use player_summary::config::AppConfig;
use player_summary::db::{DatasetLoader, FullRepository, LocalRepository};
use player_summary::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting player summary server");

    let config = AppConfig::from_default_location()?.apply_env_overrides()?;
    let scale = config.court_scale()?;

    let repository = Arc::new(LocalRepository::new());
    match &config.data.directory {
        Some(dir) => {
            let report = DatasetLoader::new(repository.clone()).load_dir(dir).await?;
            info!(
                "Imported {} records from {} ({} rejected)",
                report.inserted(),
                dir.display(),
                report.rejected()
            );
        }
        None => warn!("No data directory configured; serving an empty repository"),
    }

    let state = AppState::new(repository as Arc<dyn FullRepository>).with_scale(scale);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
