use crate::config::AppConfig;
use crate::error::CliResult;
use dealer_search_sdk::InventoryProvider;

/// Print the vehicles the configured provider returns for a dealership, as JSON
pub async fn execute(config: AppConfig, dealership_url: String) -> CliResult<()> {
    let inventory = config.inventory()?;
    let vehicles = inventory.vehicles_for(&dealership_url).await?;

    println!("{}", serde_json::to_string_pretty(&vehicles)?);
    Ok(())
}
