use super::{InventoryError, InventoryProvider, InventoryResult};
use crate::vehicle::Vehicle;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_FEED_TIMEOUT: Duration = Duration::from_secs(10);

/// Live inventory from a JSON feed
///
/// Issues `GET {endpoint}?dealership={dealership_url}` and expects a JSON array of vehicles
/// in the same camelCase shape as fixture files.
#[derive(Debug, Clone)]
pub struct FeedInventory {
    endpoint: Url,
    client: reqwest::Client,
}

impl FeedInventory {
    pub fn new(endpoint: &str, timeout: Duration) -> InventoryResult<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn request_url(&self, dealership_url: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("dealership", dealership_url);
        url
    }
}

impl InventoryProvider for FeedInventory {
    async fn vehicles_for(&self, dealership_url: &str) -> InventoryResult<Vec<Vehicle>> {
        let url = self.request_url(dealership_url);
        debug!("Fetching inventory feed {}", url);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(InventoryError::Feed {
                status: status.as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let vehicles: Vec<Vehicle> = resp.json().await?;
        info!(
            "Inventory feed returned {} vehicles for '{}'",
            vehicles.len(),
            dealership_url
        );
        Ok(vehicles)
    }
}
