//! Timeslice - periodic prompt time tracker.
//!
//! Headless host runner: opens the database, starts the prompt
//! scheduler and serves the command surface until interrupted. A
//! desktop shell embeds `timeslice_lib` instead of running this binary.

use timeslice_lib::AppContext;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => info!(%err, "no .env file loaded"),
    }

    let ctx = AppContext::new().await?;
    ctx.start().await?;
    info!("timeslice running; press ctrl-c to stop");

    tokio::signal::ctrl_c().await?;
    ctx.shutdown().await;
    Ok(())
}
