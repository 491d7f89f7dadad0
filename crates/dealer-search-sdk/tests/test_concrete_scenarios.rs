mod common;

use common::{civic_without_trim, tesla_model_x, used_camry_se, STAGING_CAMPAIGN};
use dealer_search_sdk::{generate_campaign_bundle, Vehicle, VehicleAdCopy};

/// Used 2021 Toyota Camry SE
///
/// Verifies every derived field of the reference vehicle, both on the derived copy and in
/// the rendered tables.
#[test]
fn test_used_camry_se_scenario() {
    let copy = VehicleAdCopy::derive(&used_camry_se());
    assert_eq!(copy.ad_group_name, "2021 Toyota Camry SE | VIN123456");
    assert_eq!(copy.exact_keyword, "[2021 toyota camry se]");
    assert_eq!(copy.phrase_keyword, "\"toyota camry\"");
    assert_eq!(copy.headlines[0], "2021 Toyota Camry");
    assert_eq!(copy.headlines[1], "Used Camry in Stock");
    assert_eq!(copy.path_1, "camry");
    assert_eq!(copy.path_2, "se");

    let bundle = generate_campaign_bundle(STAGING_CAMPAIGN, &[used_camry_se()]);
    let ad_group = &bundle.ad_groups.rows()[0];
    let ad = &bundle.ads.rows()[0];

    assert_eq!(ad_group[0].to_string(), STAGING_CAMPAIGN);
    assert_eq!(ad_group[1].to_string(), "2021 Toyota Camry SE | VIN123456");
    assert_eq!(ad_group[3].to_string(), "0.01");
    assert_eq!(ad[2].to_string(), "https://x/y.htm");
    assert_eq!(ad[7].to_string(), "Test Drive Today");

    assert_eq!(
        bundle.ads.to_csv().lines().nth(1).unwrap(),
        "Dealer Search – Staging,2021 Toyota Camry SE | VIN123456,https://x/y.htm,camry,se,\
         2021 Toyota Camry,Used Camry in Stock,Test Drive Today,\
         2021 Toyota Camry SE. In stock. Transparent pricing.,\
         Get pre-approved online. Visit our site for photos & price."
    );
}

/// Vehicle without a trim
///
/// Verifies that the trim segment and its leading space disappear from the ad group name and
/// that Path 2 falls back to `details`.
#[test]
fn test_missing_trim_scenario() {
    let copy = VehicleAdCopy::derive(&civic_without_trim());
    assert_eq!(copy.ad_group_name, "2019 Honda Civic | VIN000001");
    assert_eq!(copy.path_2, "details");
    assert_eq!(copy.exact_keyword, "[2019 honda civic]");
}

/// Model name with embedded whitespace
///
/// Verifies whitespace runs in model and trim become single hyphens in the display paths.
#[test]
fn test_multi_word_model_scenario() {
    let copy = VehicleAdCopy::derive(&tesla_model_x());
    assert_eq!(copy.path_1, "model-x");
    assert_eq!(copy.path_2, "long-range");
    assert_eq!(copy.headlines[1], "Model X in Stock");
}

/// Final URL containing a comma
///
/// Verifies the keyword and ad rows quote the URL field.
#[test]
fn test_final_url_with_comma_is_quoted() {
    let bundle = generate_campaign_bundle(STAGING_CAMPAIGN, &[tesla_model_x()]);
    let keywords = bundle.keywords.to_csv();
    assert!(keywords.contains(",\"https://dealer.example/tesla, model x\",0.01"));
}

/// Headline boundary
///
/// Verifies a 30 character headline source is kept and a 31 character one is cut to 30.
#[test]
fn test_headline_boundary_scenario() {
    // "2021 Toyota " is 12 chars, so an 18 char model makes exactly 30
    let exact = Vehicle {
        model: "ABCDEFGHIJKLMNOPQR".to_string(),
        ..used_camry_se()
    };
    let over = Vehicle {
        model: "ABCDEFGHIJKLMNOPQRS".to_string(),
        ..used_camry_se()
    };

    assert_eq!(
        VehicleAdCopy::derive(&exact).headlines[0],
        "2021 Toyota ABCDEFGHIJKLMNOPQR"
    );
    assert_eq!(
        VehicleAdCopy::derive(&over).headlines[0],
        "2021 Toyota ABCDEFGHIJKLMNOPQR"
    );
}
