/*!
# Build Pipeline

One build request end to end: inventory lookup, ad copy generation, archive packing. The
result is all-or-nothing; either every table was generated from the same vehicle list and
packed, or an error is returned and nothing is.
*/

use crate::{
    ad_copy::generate_campaign_bundle,
    archive::{build_archive, ArchiveError, ARCHIVE_CONTENT_TYPE, ARCHIVE_FILE_NAME},
    inventory::{InventoryError, InventoryProvider},
};
use tracing::info;

pub const DEFAULT_CAMPAIGN_NAME: &str = "Dealer Search – Staging";

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// The inventory provider could not supply vehicles
    #[error("Inventory lookup failed: {0}")]
    Inventory(#[from] InventoryError),

    /// Packing the generated tables failed
    #[error("Archive creation failed: {0}")]
    Archive(#[from] ArchiveError),
}

pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// A finished, downloadable archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltArchive {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    pub vehicle_count: usize,
}

/// Build the Search campaign archive for `dealership_url`.
pub async fn build_search_archive<P: InventoryProvider>(
    provider: &P,
    dealership_url: &str,
    campaign_name: &str,
) -> BuildResult<BuiltArchive> {
    let vehicles = provider.vehicles_for(dealership_url).await?;
    let bundle = generate_campaign_bundle(campaign_name, &vehicles);
    let bytes = build_archive(&bundle)?;

    info!(
        "Built {} for '{}': {} vehicles, {} keywords, {} bytes",
        ARCHIVE_FILE_NAME,
        dealership_url,
        vehicles.len(),
        bundle.keywords.row_count(),
        bytes.len()
    );

    Ok(BuiltArchive {
        file_name: ARCHIVE_FILE_NAME,
        content_type: ARCHIVE_CONTENT_TYPE,
        bytes,
        vehicle_count: vehicles.len(),
    })
}
