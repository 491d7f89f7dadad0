use crate::config::AppConfig;
use crate::error::CliResult;
use dealer_search_sdk::build_search_archive;
use std::path::PathBuf;

/// Build the archive for one dealership and write it to disk
pub async fn execute(config: AppConfig, dealership_url: String, output: PathBuf) -> CliResult<()> {
    let inventory = config.inventory()?;

    println!("Building Search campaign files");
    println!("Dealership URL: {}", dealership_url);
    println!("Campaign: {}", config.campaign_name);
    println!("Inventory: {}", inventory.kind());

    let built = build_search_archive(&inventory, &dealership_url, &config.campaign_name).await?;

    if output.exists() {
        println!(
            "Output file already exists and will be overwritten: {}",
            output.display()
        );
    }
    std::fs::write(&output, &built.bytes)?;

    println!("Vehicles: {}", built.vehicle_count);
    println!("Archive saved to: {} ({} bytes)", output.display(), built.bytes.len());
    Ok(())
}
