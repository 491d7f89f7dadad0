#![allow(dead_code)]

use dealer_search_sdk::{Condition, Vehicle};

pub const STAGING_CAMPAIGN: &str = "Dealer Search – Staging";

pub fn used_camry_se() -> Vehicle {
    Vehicle {
        id: "VIN123456".to_string(),
        year: 2021,
        make: "Toyota".to_string(),
        model: "Camry".to_string(),
        trim: Some("SE".to_string()),
        condition: Condition::Used,
        final_url: "https://x/y.htm".to_string(),
        city: None,
    }
}

pub fn civic_without_trim() -> Vehicle {
    Vehicle {
        id: "VIN000001".to_string(),
        year: 2019,
        make: "Honda".to_string(),
        model: "Civic".to_string(),
        trim: None,
        condition: Condition::Used,
        final_url: "https://example.com".to_string(),
        city: None,
    }
}

pub fn tesla_model_x() -> Vehicle {
    Vehicle {
        id: "VIN777777".to_string(),
        year: 2022,
        make: "Tesla".to_string(),
        model: "Model X".to_string(),
        trim: Some("Long Range".to_string()),
        condition: Condition::Certified,
        final_url: "https://dealer.example/tesla, model x".to_string(),
        city: Some("Austin".to_string()),
    }
}
