//! Tour ratings server binary.

use anyhow::Context;
use tour_ratings::{AppConfig, init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialise logging")?;
    run(config).await.context("tour ratings service failed")?;
    Ok(())
}
