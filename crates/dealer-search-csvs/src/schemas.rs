/*!
# Bulk File Schemas

The four Google Ads Editor bulk files produced for a Search campaign. Header order here is
the column order of every generated document, and the file names are the archive entry
names.
*/

use crate::{
    encoder::{to_csv, CsvValue},
    errors::{CsvError, CsvResult},
};
use std::fmt;
use std::str::FromStr;

// ================================================================================================
// Headers
// ================================================================================================

/// Expected headers for Campaigns.csv in exact order
pub const CAMPAIGNS_CSV_HEADERS: &[&str] = &[
    "Campaign",
    "Campaign Type",
    "Status",
    "Daily Budget",
    "Bidding Strategy",
    "Networks",
    "Locations",
    "Languages",
    "Start Date",
    "End Date",
];

/// Expected headers for AdGroups.csv in exact order
pub const AD_GROUPS_CSV_HEADERS: &[&str] = &["Campaign", "Ad Group", "Status", "Default Max. CPC"];

/// Expected headers for Keywords.csv in exact order
pub const KEYWORDS_CSV_HEADERS: &[&str] = &[
    "Campaign",
    "Ad Group",
    "Criterion Type",
    "Keyword",
    "Final URL",
    "Max CPC",
];

/// Expected headers for Ads_RSA.csv in exact order
pub const ADS_CSV_HEADERS: &[&str] = &[
    "Campaign",
    "Ad Group",
    "Final URL",
    "Path 1",
    "Path 2",
    "Headline 1",
    "Headline 2",
    "Headline 3",
    "Description 1",
    "Description 2",
];

// ================================================================================================
// Table Kinds
// ================================================================================================

/// The four bulk files, in archive order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Campaigns,
    AdGroups,
    Keywords,
    Ads,
}

impl TableKind {
    pub const ALL: [TableKind; 4] = [
        TableKind::Campaigns,
        TableKind::AdGroups,
        TableKind::Keywords,
        TableKind::Ads,
    ];

    pub fn headers(self) -> &'static [&'static str] {
        match self {
            TableKind::Campaigns => CAMPAIGNS_CSV_HEADERS,
            TableKind::AdGroups => AD_GROUPS_CSV_HEADERS,
            TableKind::Keywords => KEYWORDS_CSV_HEADERS,
            TableKind::Ads => ADS_CSV_HEADERS,
        }
    }

    /// Archive entry name
    pub fn file_name(self) -> &'static str {
        match self {
            TableKind::Campaigns => "Campaigns.csv",
            TableKind::AdGroups => "AdGroups.csv",
            TableKind::Keywords => "Keywords.csv",
            TableKind::Ads => "Ads_RSA.csv",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for TableKind {
    type Err = CsvError;

    fn from_str(file_name: &str) -> CsvResult<Self> {
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.file_name() == file_name)
            .ok_or_else(|| CsvError::UnknownTable(file_name.to_string()))
    }
}

// ================================================================================================
// Tables
// ================================================================================================

/// A finished table: fixed headers plus data rows
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    kind: TableKind,
    rows: Vec<Vec<CsvValue>>,
}

impl CsvTable {
    /// Build a table from rows.
    ///
    /// Row width is not checked; generated rows are built against the same header constants.
    pub fn new(kind: TableKind, rows: Vec<Vec<CsvValue>>) -> Self {
        Self { kind, rows }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn headers(&self) -> &'static [&'static str] {
        self.kind.headers()
    }

    pub fn rows(&self) -> &[Vec<CsvValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render as CSV text
    pub fn to_csv(&self) -> String {
        to_csv(self.headers(), &self.rows)
    }
}

// ================================================================================================
// Tests
// ================================================================================================
