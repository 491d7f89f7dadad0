use crate::config::AppConfig;
use crate::error::CliResult;
use crate::server::{router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub async fn execute(config: AppConfig) -> CliResult<()> {
    let inventory = config.inventory()?;
    info!(
        "Using {} inventory, campaign '{}'",
        inventory.kind(),
        config.campaign_name
    );

    let state = Arc::new(AppState {
        inventory,
        campaign_name: config.campaign_name,
    });

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Dealer Search CSV Builder listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
