use super::text::{clamp_description, clamp_headline, display_path};
use crate::vehicle::{Condition, Vehicle};

pub const HEADLINE_3: &str = "Test Drive Today";
pub const DESCRIPTION_2: &str = "Get pre-approved online. Visit our site for photos & price.";

/// Path 2 when the vehicle has no trim
pub const DEFAULT_PATH_2: &str = "details";

/// All text derived from a single vehicle
///
/// Every table row for the vehicle is built from this, so the ad group, both keywords and the
/// ad always agree on the ad group name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleAdCopy {
    pub ad_group_name: String,
    pub final_url: String,
    /// `[year make model trim]`, lowercased
    pub exact_keyword: String,
    /// `"make model"`, lowercased
    pub phrase_keyword: String,
    pub headlines: [String; 3],
    pub descriptions: [String; 2],
    pub path_1: String,
    pub path_2: String,
}

impl VehicleAdCopy {
    pub fn derive(vehicle: &Vehicle) -> Self {
        let display_name = vehicle.display_name();

        let ad_group_name = format!("{} | {}", display_name, vehicle.id);
        let exact_keyword = format!("[{}]", display_name.to_lowercase());
        let phrase_keyword = format!(
            "\"{} {}\"",
            vehicle.make.to_lowercase(),
            vehicle.model.to_lowercase()
        );

        let condition_prefix = if vehicle.condition == Condition::Used {
            "Used "
        } else {
            ""
        };
        let headlines = [
            clamp_headline(format!("{} {} {}", vehicle.year, vehicle.make, vehicle.model)),
            clamp_headline(format!("{}{} in Stock", condition_prefix, vehicle.model)),
            clamp_headline(HEADLINE_3.to_string()),
        ];
        let descriptions = [
            clamp_description(format!("{}. In stock. Transparent pricing.", display_name)),
            clamp_description(DESCRIPTION_2.to_string()),
        ];

        let path_1 = display_path(&vehicle.model);
        let path_2 = vehicle
            .trim()
            .map_or_else(|| DEFAULT_PATH_2.to_string(), display_path);

        Self {
            ad_group_name,
            final_url: vehicle.final_url.clone(),
            exact_keyword,
            phrase_keyword,
            headlines,
            descriptions,
            path_1,
            path_2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camry() -> Vehicle {
        Vehicle {
            id: "VIN123456".to_string(),
            year: 2021,
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            trim: Some("SE".to_string()),
            condition: Condition::Used,
            final_url: "https://x/y.htm".to_string(),
            city: Some("Fort Myers".to_string()),
        }
    }

    #[test]
    fn test_derive_used_vehicle_with_trim() {
        let copy = VehicleAdCopy::derive(&camry());

        assert_eq!(copy.ad_group_name, "2021 Toyota Camry SE | VIN123456");
        assert_eq!(copy.exact_keyword, "[2021 toyota camry se]");
        assert_eq!(copy.phrase_keyword, "\"toyota camry\"");
        assert_eq!(
            copy.headlines,
            [
                "2021 Toyota Camry".to_string(),
                "Used Camry in Stock".to_string(),
                "Test Drive Today".to_string(),
            ]
        );
        assert_eq!(
            copy.descriptions[0],
            "2021 Toyota Camry SE. In stock. Transparent pricing."
        );
        assert_eq!(copy.descriptions[1], DESCRIPTION_2);
        assert_eq!(copy.path_1, "camry");
        assert_eq!(copy.path_2, "se");
        assert_eq!(copy.final_url, "https://x/y.htm");
    }

    #[test]
    fn test_derive_without_trim() {
        let vehicle = Vehicle {
            trim: None,
            ..camry()
        };
        let copy = VehicleAdCopy::derive(&vehicle);

        assert_eq!(copy.ad_group_name, "2021 Toyota Camry | VIN123456");
        assert_eq!(copy.exact_keyword, "[2021 toyota camry]");
        assert_eq!(
            copy.descriptions[0],
            "2021 Toyota Camry. In stock. Transparent pricing."
        );
        assert_eq!(copy.path_2, DEFAULT_PATH_2);
    }

    #[test]
    fn test_only_used_vehicles_get_used_prefix() {
        for condition in [Condition::New, Condition::Certified] {
            let vehicle = Vehicle {
                condition,
                ..camry()
            };
            assert_eq!(VehicleAdCopy::derive(&vehicle).headlines[1], "Camry in Stock");
        }
    }

    #[test]
    fn test_long_names_are_clamped() {
        let vehicle = Vehicle {
            make: "Mercedes-Benz".to_string(),
            model: "Sprinter Cargo Van High Roof".to_string(),
            trim: Some("2500 Standard Roof 144\" Wheelbase RWD Extended Length".to_string()),
            ..camry()
        };
        let copy = VehicleAdCopy::derive(&vehicle);

        assert_eq!(copy.headlines[0], "2021 Mercedes-Benz Sprinter Ca");
        assert_eq!(copy.headlines[1], "Used Sprinter Cargo Van High R");
        assert_eq!(copy.descriptions[0].chars().count(), 90);
        assert!(copy.descriptions[0].starts_with("2021 Mercedes-Benz Sprinter Cargo Van High Roof 2500"));
        assert_eq!(copy.path_1, "sprinter-cargo-van-high-roof");
    }

    #[test]
    fn test_malformed_vehicle_still_produces_copy() {
        let vehicle = Vehicle {
            model: String::new(),
            make: String::new(),
            trim: None,
            ..camry()
        };
        let copy = VehicleAdCopy::derive(&vehicle);

        assert_eq!(copy.ad_group_name, "2021   | VIN123456");
        assert_eq!(copy.phrase_keyword, "\" \"");
        assert_eq!(copy.path_1, "");
    }
}
