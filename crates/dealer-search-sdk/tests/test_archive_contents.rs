mod common;

use common::{civic_without_trim, used_camry_se, STAGING_CAMPAIGN};
use dealer_search_sdk::{
    build_archive, build_search_archive,
    csvs::{read_table, TableKind},
    generate_campaign_bundle, read_archive, FixtureInventory, DEFAULT_CAMPAIGN_NAME,
};

/// Two-vehicle archive
///
/// Verifies the archive holds exactly the four bulk files, in order, each non-empty and
/// parseable on its own with the schema's header row and column count.
#[test]
fn test_two_vehicle_archive_entries() {
    let bundle = generate_campaign_bundle(STAGING_CAMPAIGN, &[used_camry_se(), civic_without_trim()]);
    let bytes = build_archive(&bundle).unwrap();
    let entries = read_archive(&bytes).unwrap();

    let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Campaigns.csv", "AdGroups.csv", "Keywords.csv", "Ads_RSA.csv"]
    );

    let expected_rows = [1, 2, 4, 2];
    for (entry, expected) in entries.iter().zip(expected_rows) {
        assert!(!entry.text.is_empty());
        assert!(!entry.text.ends_with('\n'));

        let kind: TableKind = entry.name.parse().unwrap();
        let rows = read_table(kind, &entry.text).unwrap();
        assert_eq!(rows.len(), expected, "{}", entry.name);
        for row in &rows {
            assert_eq!(row.len(), kind.headers().len());
        }
    }
}

/// Empty inventory archive
///
/// Verifies a vehicle-less build still produces all four files, with only the campaign row.
#[test]
fn test_empty_inventory_archive() {
    let bundle = generate_campaign_bundle(STAGING_CAMPAIGN, &[]);
    let entries = read_archive(&build_archive(&bundle).unwrap()).unwrap();

    assert_eq!(entries.len(), 4);
    for entry in &entries {
        let kind: TableKind = entry.name.parse().unwrap();
        let rows = read_table(kind, &entry.text).unwrap();
        let expected = if kind == TableKind::Campaigns { 1 } else { 0 };
        assert_eq!(rows.len(), expected);
    }
}

/// Demo dealership build
///
/// Verifies the full pipeline against the built-in fixtures, including the exact keyword
/// document text.
#[tokio::test]
async fn test_demo_dealership_pipeline() {
    let built = build_search_archive(
        &FixtureInventory::demo(),
        "https://www.autonationtoyotafortmyers.com",
        DEFAULT_CAMPAIGN_NAME,
    )
    .await
    .unwrap();

    let entries = read_archive(&built.bytes).unwrap();
    let keywords = entries
        .iter()
        .find(|entry| entry.name == "Keywords.csv")
        .unwrap();

    let camry_url = "https://www.autonationtoyotafortmyers.com/used/Toyota/2021-Toyota-Camry-VIN123456.htm";
    let rav4_url = "https://www.autonationtoyotafortmyers.com/used/Toyota/2020-Toyota-RAV4-VIN987654.htm";
    let expected = format!(
        "Campaign,Ad Group,Criterion Type,Keyword,Final URL,Max CPC\n\
         Dealer Search – Staging,2021 Toyota Camry SE | VIN123456,Exact,[2021 toyota camry se],{camry_url},0.01\n\
         Dealer Search – Staging,2021 Toyota Camry SE | VIN123456,Phrase,\"\"\"toyota camry\"\"\",{camry_url},0.01\n\
         Dealer Search – Staging,2020 Toyota RAV4 XLE | VIN987654,Exact,[2020 toyota rav4 xle],{rav4_url},0.01\n\
         Dealer Search – Staging,2020 Toyota RAV4 XLE | VIN987654,Phrase,\"\"\"toyota rav4\"\"\",{rav4_url},0.01"
    );
    assert_eq!(keywords.text, expected);
}

/// Identical inputs
///
/// Verifies two builds with the same vehicles produce byte-identical archives.
#[test]
fn test_archive_is_reproducible() {
    let vehicles = [used_camry_se(), civic_without_trim()];
    let first = build_archive(&generate_campaign_bundle(STAGING_CAMPAIGN, &vehicles)).unwrap();
    let second = build_archive(&generate_campaign_bundle(STAGING_CAMPAIGN, &vehicles)).unwrap();
    assert_eq!(first, second);
}
