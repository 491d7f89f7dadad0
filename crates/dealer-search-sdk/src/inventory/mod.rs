/*!
# Inventory Providers

Where vehicles come from. Ad copy generation only ever sees the `Vec<Vehicle>` a provider
returns; how that list is sourced is a provider concern.

- [`FixtureInventory`]: static vehicle lists selected by a URL substring match, with a
  one-vehicle fallback. Ships with the demo dealership and can load more from YAML.
- [`FeedInventory`]: live retrieval from a JSON vehicle feed over HTTP.
- [`Inventory`]: either of the above, chosen at startup from configuration.
*/

mod feed;
mod fixture;

use crate::vehicle::Vehicle;
use std::future::Future;

pub use {
    feed::{FeedInventory, DEFAULT_FEED_TIMEOUT},
    fixture::{FixtureDealer, FixtureInventory, FALLBACK_FINAL_URL},
};

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid fixture file: {0}")]
    Fixture(#[from] serde_yaml::Error),

    #[error("Invalid feed endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Inventory feed returned {status}: {message}")]
    Feed { status: u16, message: String },
}

pub type InventoryResult<T> = std::result::Result<T, InventoryError>;

/// Supplies the ordered vehicle list for a dealership
///
/// `dealership_url` is an opaque selection key; it may be empty.
pub trait InventoryProvider {
    fn vehicles_for(
        &self,
        dealership_url: &str,
    ) -> impl Future<Output = InventoryResult<Vec<Vehicle>>> + Send;
}

/// The configured provider
#[derive(Debug, Clone)]
pub enum Inventory {
    Fixture(FixtureInventory),
    Feed(FeedInventory),
}

impl Inventory {
    /// Short provider name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Inventory::Fixture(_) => "fixture",
            Inventory::Feed(_) => "feed",
        }
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::Fixture(FixtureInventory::demo())
    }
}

impl From<FixtureInventory> for Inventory {
    fn from(inventory: FixtureInventory) -> Self {
        Inventory::Fixture(inventory)
    }
}

impl From<FeedInventory> for Inventory {
    fn from(inventory: FeedInventory) -> Self {
        Inventory::Feed(inventory)
    }
}

impl InventoryProvider for Inventory {
    async fn vehicles_for(&self, dealership_url: &str) -> InventoryResult<Vec<Vehicle>> {
        match self {
            Inventory::Fixture(fixture) => fixture.vehicles_for(dealership_url).await,
            Inventory::Feed(feed) => feed.vehicles_for(dealership_url).await,
        }
    }
}
