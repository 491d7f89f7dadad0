/*!
# CSV Read-Back Validation

Parses generated documents with `csv::Reader` and checks them against the fixed schemas, so
an archive can be verified independently of the code that produced it.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::TableKind,
};
use csv::{ReaderBuilder, StringRecord};

// ================================================================================================
// CSV Reading with Validation
// ================================================================================================

/// Parse a document of the given kind and validate its header row and row widths.
///
/// Returns the data rows (header excluded).
pub fn read_table(kind: TableKind, text: &str) -> CsvResult<Vec<StringRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?;
    if headers.is_empty() {
        return Err(CsvError::MissingHeader(kind.file_name().to_string()));
    }
    validate_headers(headers.iter(), kind.headers(), kind.file_name())?;

    let expected_width = kind.headers().len();
    let mut rows = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result?;
        if record.len() != expected_width {
            return Err(CsvError::SchemaValidation(format!(
                "{}: row {} has {} fields, expected {}",
                kind.file_name(),
                index + 1,
                record.len(),
                expected_width
            )));
        }
        rows.push(record);
    }

    Ok(rows)
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> CsvResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    if actual_headers.len() != expected.len() {
        return Err(CsvError::SchemaValidation(format!(
            "{}: expected {} headers, found {}",
            file_type,
            expected.len(),
            actual_headers.len()
        )));
    }

    for (i, (actual, expected)) in actual_headers.iter().zip(expected.iter()).enumerate() {
        if actual != expected {
            return Err(CsvError::SchemaValidation(format!(
                "{}: header {} should be '{}', found '{}'",
                file_type,
                i + 1,
                expected,
                actual
            )));
        }
    }

    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
