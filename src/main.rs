//! dbpilot - Terminal client for a natural-language SQL assistant

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging; stderr keeps the shell output readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dbpilot=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting dbpilot v{}", env!("CARGO_PKG_VERSION"));

    // Run CLI
    dbpilot::cli::run()?;

    Ok(())
}
