use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use skycast_core::Config;
use skycast_store::BeliefStore;

#[tokio::main]
async fn main() -> Result<()> {
    skycast_core::init()?;

    let config = Config::load().context("Failed to load configuration")?;

    let validation = config.validate();
    for warning in &validation.warnings {
        tracing::warn!("Configuration warning - {warning}");
    }
    if !validation.is_valid() {
        bail!("Invalid configuration: {}", validation.error_summary());
    }

    let store = BeliefStore::load(&config.dataset_path).with_context(|| {
        format!(
            "Failed to load weather data from {}",
            config.dataset_path.display()
        )
    })?;
    tracing::info!("Serving {} beliefs", store.len());

    let addr = SocketAddr::new(config.server.host, config.server.port);
    tracing::info!("Skycast listening on http://{addr}");
    warp::serve(skycast_server::routes(Arc::new(store)))
        .run(addr)
        .await;

    Ok(())
}
