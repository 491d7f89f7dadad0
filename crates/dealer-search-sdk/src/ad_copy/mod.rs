/*!
# Ad Copy Generation

Turns a campaign name and an ordered vehicle list into the four Search campaign tables:

| Table | Rows |
|---|---|
| Campaigns | 1 |
| Ad groups | 1 per vehicle |
| Keywords | 2 per vehicle (exact, phrase) |
| Responsive search ads | 1 per vehicle |

Generation is a pure fold over the vehicles. Row order follows vehicle order; vehicles are
neither validated, reordered nor deduplicated.
*/

mod rows;
mod text;
mod vehicle_copy;

use crate::vehicle::Vehicle;
use dealer_search_csvs::{CsvTable, CsvValue, TableKind};

pub use {
    rows::{
        BIDDING_STRATEGY, CAMPAIGN_TYPE, CRITERION_EXACT, CRITERION_PHRASE, DAILY_BUDGET,
        DEFAULT_BID, LANGUAGES, LOCATIONS, NETWORKS, STATUS_ENABLED,
    },
    text::{
        clamp, clamp_description, clamp_headline, display_path, DESCRIPTION_MAX_CHARS,
        HEADLINE_MAX_CHARS,
    },
    vehicle_copy::{VehicleAdCopy, DEFAULT_PATH_2, DESCRIPTION_2, HEADLINE_3},
};

// ================================================================================================
// Campaign Bundle
// ================================================================================================

/// The four finished tables for one campaign
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignBundle {
    pub campaigns: CsvTable,
    pub ad_groups: CsvTable,
    pub keywords: CsvTable,
    pub ads: CsvTable,
}

/// One rendered bulk file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub name: &'static str,
    pub text: String,
}

impl CampaignBundle {
    /// Tables in archive order
    pub fn tables(&self) -> [&CsvTable; 4] {
        [&self.campaigns, &self.ad_groups, &self.keywords, &self.ads]
    }

    pub fn table(&self, kind: TableKind) -> &CsvTable {
        match kind {
            TableKind::Campaigns => &self.campaigns,
            TableKind::AdGroups => &self.ad_groups,
            TableKind::Keywords => &self.keywords,
            TableKind::Ads => &self.ads,
        }
    }

    /// Render every table, in archive order
    pub fn to_csv_files(&self) -> Vec<CsvFile> {
        self.tables()
            .into_iter()
            .map(|table| CsvFile {
                name: table.kind().file_name(),
                text: table.to_csv(),
            })
            .collect()
    }
}

// ================================================================================================
// Generation
// ================================================================================================

/// Row accumulator threaded through the fold; consumed by `finish`.
#[derive(Default)]
struct BundleRows {
    ad_groups: Vec<Vec<CsvValue>>,
    keywords: Vec<Vec<CsvValue>>,
    ads: Vec<Vec<CsvValue>>,
}

impl BundleRows {
    fn with_capacity(vehicle_count: usize) -> Self {
        Self {
            ad_groups: Vec::with_capacity(vehicle_count),
            keywords: Vec::with_capacity(vehicle_count * 2),
            ads: Vec::with_capacity(vehicle_count),
        }
    }

    fn push(mut self, campaign_name: &str, copy: &VehicleAdCopy) -> Self {
        self.ad_groups.push(rows::ad_group_row(campaign_name, copy));
        self.keywords.extend(rows::keyword_rows(campaign_name, copy));
        self.ads.push(rows::ad_row(campaign_name, copy));
        self
    }

    fn finish(self, campaign_name: &str) -> CampaignBundle {
        CampaignBundle {
            campaigns: CsvTable::new(TableKind::Campaigns, vec![rows::campaign_row(campaign_name)]),
            ad_groups: CsvTable::new(TableKind::AdGroups, self.ad_groups),
            keywords: CsvTable::new(TableKind::Keywords, self.keywords),
            ads: CsvTable::new(TableKind::Ads, self.ads),
        }
    }
}

/// Generate the campaign, ad group, keyword and ad tables for `vehicles`.
///
/// Deterministic in `campaign_name` and the vehicle sequence; never fails.
pub fn generate_campaign_bundle(campaign_name: &str, vehicles: &[Vehicle]) -> CampaignBundle {
    vehicles
        .iter()
        .map(VehicleAdCopy::derive)
        .fold(BundleRows::with_capacity(vehicles.len()), |rows, copy| {
            rows.push(campaign_name, &copy)
        })
        .finish(campaign_name)
}

// ================================================================================================
// Tests
// ================================================================================================
