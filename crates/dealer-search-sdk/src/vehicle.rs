use serde::{Deserialize, Serialize};
use std::fmt;

/// Inventory condition of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    New,
    Used,
    Certified,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Condition::New => "new",
            Condition::Used => "used",
            Condition::Certified => "certified",
        })
    }
}

/// A single vehicle listing, as supplied by an inventory provider
///
/// Field names follow the camelCase JSON shape used by inventory feeds and fixture files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Listing identifier (usually the VIN), unique within a batch
    pub id: String,
    pub year: i32,
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub trim: Option<String>,
    pub condition: Condition,
    /// Landing page for ads and keywords
    pub final_url: String,
    #[serde(default)]
    pub city: Option<String>,
}

impl Vehicle {
    /// Trim level, treating an empty string as absent
    pub fn trim(&self) -> Option<&str> {
        self.trim.as_deref().filter(|trim| !trim.is_empty())
    }

    /// `"{year} {make} {model}"` plus `" {trim}"` when a trim is present
    pub fn display_name(&self) -> String {
        match self.trim() {
            Some(trim) => format!("{} {} {} {}", self.year, self.make, self.model, trim),
            None => format!("{} {} {}", self.year, self.make, self.model),
        }
    }
}
