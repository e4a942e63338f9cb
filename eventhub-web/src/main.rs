//! eventhub-web - Event discovery, voting, and ticketing API
//!
//! Serves the voting and ticketing catalogs to the web front-end. All
//! state is an immutable snapshot loaded at startup; vote and ticket
//! "transactions" are simulated and terminate in a redirect carrying a
//! fabricated reference.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use eventhub_common::{config, data};
use eventhub_web::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "eventhub-web", about = "EventHub catalog and checkout API")]
struct Args {
    /// Bind host (overrides the config file)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides the config file)
    #[arg(long)]
    port: Option<u16>,

    /// Directory with voting_events.json / ticketing_events.json
    /// (overrides the config file and the embedded datasets)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing before anything that can log
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting EventHub Web (eventhub-web) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let config = config::load_config(args.config.as_deref());
    let data_dir = config::resolve_data_dir(args.data_dir.as_deref(), &config);

    if let Some(dir) = &data_dir {
        info!("Catalog data directory: {}", dir.display());
    }
    let (voting, ticketing) = data::load_catalogs(data_dir.as_deref())?;
    info!(
        "✓ Loaded {} voting events, {} ticketing events",
        voting.len(),
        ticketing.len()
    );

    let state = AppState::new(voting, ticketing);
    let app = build_router(state);

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!("eventhub-web listening on http://{}:{}", host, port);
    info!("Health check: http://{}:{}/health", host, port);

    axum::serve(listener, app).await?;

    Ok(())
}
