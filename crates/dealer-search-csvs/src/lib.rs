/*!
# Dealer Search CSV Schema Definitions

This crate owns the **CSV side** of the Google Ads Search bulk files:

- **Encoding** (`encoder`): byte-exact CSV text from headers and scalar rows
- **Schemas** (`schemas`): the four bulk files, their headers and archive entry names
- **Validation** (`validation`): parse a generated document back and check it against its schema

## Schema Files

| File | Rows |
|---|---|
| `Campaigns.csv` | exactly one campaign |
| `AdGroups.csv` | one per vehicle |
| `Keywords.csv` | two per vehicle (exact + phrase) |
| `Ads_RSA.csv` | one responsive search ad per vehicle |

## Usage

```rust
use dealer_search_csvs::{read_table, CsvTable, CsvValue, TableKind, CsvResult};

fn example() -> CsvResult<()> {
    let table = CsvTable::new(
        TableKind::AdGroups,
        vec![vec![
            CsvValue::from("Dealer Search"),
            CsvValue::from("2019 Honda Civic | VIN000001"),
            CsvValue::from("Enabled"),
            CsvValue::from("0.01"),
        ]],
    );

    let text = table.to_csv();
    let rows = read_table(TableKind::AdGroups, &text)?;
    assert_eq!(rows.len(), 1);
    Ok(())
}
```
*/

pub mod encoder;
pub mod errors;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use encoder::{encode_header, encode_row, escape_field, to_csv, CsvValue};
pub use errors::{CsvError, CsvResult};
pub use schemas::{
    CsvTable, TableKind, ADS_CSV_HEADERS, AD_GROUPS_CSV_HEADERS, CAMPAIGNS_CSV_HEADERS,
    KEYWORDS_CSV_HEADERS,
};
pub use validation::read_table;
