//! Row builders for the four bulk files. Column order matches the header constants in
//! `dealer_search_csvs::schemas`.

use super::vehicle_copy::VehicleAdCopy;
use dealer_search_csvs::CsvValue;

pub const CAMPAIGN_TYPE: &str = "Search";
pub const STATUS_ENABLED: &str = "Enabled";
pub const BIDDING_STRATEGY: &str = "Manual CPC";
pub const NETWORKS: &str = "Google Search;Search Partners";
pub const LOCATIONS: &str = "United States";
pub const LANGUAGES: &str = "English";

/// Campaign daily budget, emitted as literal text
pub const DAILY_BUDGET: &str = "0.01";

/// Ad group default and keyword max CPC, emitted as literal text
pub const DEFAULT_BID: &str = "0.01";

pub const CRITERION_EXACT: &str = "Exact";
pub const CRITERION_PHRASE: &str = "Phrase";

pub(super) fn campaign_row(campaign_name: &str) -> Vec<CsvValue> {
    vec![
        campaign_name.into(),
        CAMPAIGN_TYPE.into(),
        STATUS_ENABLED.into(),
        DAILY_BUDGET.into(),
        BIDDING_STRATEGY.into(),
        NETWORKS.into(),
        LOCATIONS.into(),
        LANGUAGES.into(),
        CsvValue::Empty, // start date
        CsvValue::Empty, // end date
    ]
}

pub(super) fn ad_group_row(campaign_name: &str, copy: &VehicleAdCopy) -> Vec<CsvValue> {
    vec![
        campaign_name.into(),
        (&copy.ad_group_name).into(),
        STATUS_ENABLED.into(),
        DEFAULT_BID.into(),
    ]
}

/// Exact-match row first, then phrase-match
pub(super) fn keyword_rows(campaign_name: &str, copy: &VehicleAdCopy) -> [Vec<CsvValue>; 2] {
    let keyword_row = |criterion: &str, keyword: &String| -> Vec<CsvValue> {
        vec![
            campaign_name.into(),
            (&copy.ad_group_name).into(),
            criterion.into(),
            keyword.into(),
            (&copy.final_url).into(),
            DEFAULT_BID.into(),
        ]
    };

    [
        keyword_row(CRITERION_EXACT, &copy.exact_keyword),
        keyword_row(CRITERION_PHRASE, &copy.phrase_keyword),
    ]
}

pub(super) fn ad_row(campaign_name: &str, copy: &VehicleAdCopy) -> Vec<CsvValue> {
    let [headline_1, headline_2, headline_3] = &copy.headlines;
    let [description_1, description_2] = &copy.descriptions;

    vec![
        campaign_name.into(),
        (&copy.ad_group_name).into(),
        (&copy.final_url).into(),
        (&copy.path_1).into(),
        (&copy.path_2).into(),
        headline_1.into(),
        headline_2.into(),
        headline_3.into(),
        description_1.into(),
        description_2.into(),
    ]
}
