use super::{InventoryProvider, InventoryResult};
use crate::vehicle::{Condition, Vehicle};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Final URL of the fallback vehicle when no dealership URL was given
pub const FALLBACK_FINAL_URL: &str = "https://example.com";

/// Vehicles served for every dealership URL containing `url_contains`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixtureDealer {
    pub url_contains: String,
    pub vehicles: Vec<Vehicle>,
}

/// Static inventory keyed by URL substring
///
/// Dealers are checked in order and the first match wins. URLs matching no dealer (including
/// the empty URL) get a single generic vehicle whose final URL is the dealership URL.
///
/// Fixture files are YAML:
///
/// ```yaml
/// dealers:
///   - urlContains: example-toyota.com
///     vehicles:
///       - id: VIN123456
///         year: 2021
///         make: Toyota
///         model: Camry
///         trim: SE
///         condition: used
///         finalUrl: https://www.example-toyota.com/used/2021-Toyota-Camry-VIN123456.htm
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureInventory {
    #[serde(default)]
    pub dealers: Vec<FixtureDealer>,
}

impl FixtureInventory {
    pub fn new(dealers: Vec<FixtureDealer>) -> Self {
        Self { dealers }
    }

    /// The built-in demo dealership
    pub fn demo() -> Self {
        Self::new(vec![FixtureDealer {
            url_contains: "autonationtoyotafortmyers.com".to_string(),
            vehicles: vec![
                Vehicle {
                    id: "VIN123456".to_string(),
                    year: 2021,
                    make: "Toyota".to_string(),
                    model: "Camry".to_string(),
                    trim: Some("SE".to_string()),
                    condition: Condition::Used,
                    final_url: "https://www.autonationtoyotafortmyers.com/used/Toyota/2021-Toyota-Camry-VIN123456.htm".to_string(),
                    city: Some("Fort Myers".to_string()),
                },
                Vehicle {
                    id: "VIN987654".to_string(),
                    year: 2020,
                    make: "Toyota".to_string(),
                    model: "RAV4".to_string(),
                    trim: Some("XLE".to_string()),
                    condition: Condition::Used,
                    final_url: "https://www.autonationtoyotafortmyers.com/used/Toyota/2020-Toyota-RAV4-VIN987654.htm".to_string(),
                    city: Some("Fort Myers".to_string()),
                },
            ],
        }])
    }

    pub fn from_yaml_str(yaml: &str) -> InventoryResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> InventoryResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Vehicles for `dealership_url`; never empty unless the matching dealer lists no vehicles
    pub fn lookup(&self, dealership_url: &str) -> Vec<Vehicle> {
        match self
            .dealers
            .iter()
            .find(|dealer| dealership_url.contains(&dealer.url_contains))
        {
            Some(dealer) => {
                debug!(
                    "Fixture match '{}' for {} ({} vehicles)",
                    dealer.url_contains,
                    dealership_url,
                    dealer.vehicles.len()
                );
                dealer.vehicles.clone()
            }
            None => vec![fallback_vehicle(dealership_url)],
        }
    }
}

impl InventoryProvider for FixtureInventory {
    async fn vehicles_for(&self, dealership_url: &str) -> InventoryResult<Vec<Vehicle>> {
        Ok(self.lookup(dealership_url))
    }
}

fn fallback_vehicle(dealership_url: &str) -> Vehicle {
    let final_url = if dealership_url.is_empty() {
        FALLBACK_FINAL_URL
    } else {
        dealership_url
    };

    Vehicle {
        id: "VIN000001".to_string(),
        year: 2019,
        make: "Honda".to_string(),
        model: "Civic".to_string(),
        trim: Some("EX".to_string()),
        condition: Condition::Used,
        final_url: final_url.to_string(),
        city: None,
    }
}
