use crate::error::{CliError, CliResult};
use dealer_search_sdk::{FeedInventory, FixtureInventory, Inventory, DEFAULT_CAMPAIGN_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration file structure
///
/// Every section is optional; a missing file means all defaults (demo fixtures, port 8080).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,

    /// Campaign name written into every table
    pub campaign_name: String,

    pub inventory: InventoryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which inventory provider to use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InventoryConfig {
    /// Static fixtures; the built-in demo dealership unless a fixtures file is given
    Fixture {
        #[serde(default)]
        fixtures_file: Option<PathBuf>,
    },

    /// Live JSON feed
    Feed {
        endpoint: String,
        #[serde(default = "default_feed_timeout_secs")]
        timeout_secs: u64,
    },
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            campaign_name: DEFAULT_CAMPAIGN_NAME.to_string(),
            inventory: InventoryConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        InventoryConfig::Fixture {
            fixtures_file: None,
        }
    }
}

impl AppConfig {
    /// Load from a YAML file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let yaml = std::fs::read_to_string(path).map_err(|e| {
            CliError::InvalidConfig(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: AppConfig = serde_yaml::from_str(&yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.campaign_name.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "campaign_name must not be empty".to_string(),
            ));
        }
        if let InventoryConfig::Feed { timeout_secs: 0, .. } = self.inventory {
            return Err(CliError::InvalidConfig(
                "inventory.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the configured inventory provider
    pub fn inventory(&self) -> CliResult<Inventory> {
        let inventory = match &self.inventory {
            InventoryConfig::Fixture {
                fixtures_file: None,
            } => FixtureInventory::demo().into(),
            InventoryConfig::Fixture {
                fixtures_file: Some(path),
            } => FixtureInventory::from_yaml_file(path)?.into(),
            InventoryConfig::Feed {
                endpoint,
                timeout_secs,
            } => FeedInventory::new(endpoint, Duration::from_secs(*timeout_secs))?.into(),
        };
        Ok(inventory)
    }
}

fn default_feed_timeout_secs() -> u64 {
    10
}
