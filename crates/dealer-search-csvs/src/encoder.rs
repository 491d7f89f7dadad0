/*!
# CSV Encoding

Serializes header + rows into CSV text that the Google Ads Editor bulk importer accepts.

The rules are deliberately narrower than RFC 4180 writers such as `csv::Writer`:

- a field is quoted only when it contains a comma, a double quote or a line feed
  (a lone carriage return is emitted verbatim)
- records are joined with a bare `\n` and the document has no trailing newline

Both rules are part of the byte-exact output contract, so encoding is done here rather
than through the `csv` crate writer. Reading documents back goes through `csv::Reader`
(see [`crate::validation`]).
*/

use std::borrow::Cow;
use std::fmt;

/// Field and record separators
const DELIMITER: char = ',';
const QUOTE: char = '"';
const LINE_FEED: char = '\n';

// ================================================================================================
// Cell Values
// ================================================================================================

/// A single scalar cell
#[derive(Debug, Clone, PartialEq)]
pub enum CsvValue {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Absent value, rendered as an empty field
    Empty,
}

impl fmt::Display for CsvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvValue::Text(text) => f.write_str(text),
            CsvValue::Integer(value) => write!(f, "{}", value),
            // f64's Display never uses exponent notation or locale grouping
            CsvValue::Float(value) => write!(f, "{}", value),
            CsvValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CsvValue {
    fn from(value: &str) -> Self {
        CsvValue::Text(value.to_string())
    }
}

impl From<String> for CsvValue {
    fn from(value: String) -> Self {
        CsvValue::Text(value)
    }
}

impl From<&String> for CsvValue {
    fn from(value: &String) -> Self {
        CsvValue::Text(value.clone())
    }
}

impl From<i32> for CsvValue {
    fn from(value: i32) -> Self {
        CsvValue::Integer(value.into())
    }
}

impl From<i64> for CsvValue {
    fn from(value: i64) -> Self {
        CsvValue::Integer(value)
    }
}

impl From<u32> for CsvValue {
    fn from(value: u32) -> Self {
        CsvValue::Integer(value.into())
    }
}

impl From<f64> for CsvValue {
    fn from(value: f64) -> Self {
        CsvValue::Float(value)
    }
}

impl<T: Into<CsvValue>> From<Option<T>> for CsvValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CsvValue::Empty, Into::into)
    }
}

// ================================================================================================
// Encoding
// ================================================================================================

/// Escape one field: wrap in quotes and double internal quotes when the text contains a
/// comma, a quote or a line feed; otherwise return it untouched.
pub fn escape_field(text: &str) -> Cow<'_, str> {
    let needs_quotes = text
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == LINE_FEED);

    if !needs_quotes {
        return Cow::Borrowed(text);
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push(QUOTE);
    for c in text.chars() {
        if c == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);
    Cow::Owned(quoted)
}

/// Encode one record (no line terminator)
pub fn encode_row(values: &[CsvValue]) -> String {
    values
        .iter()
        .map(|value| escape_field(&value.to_string()).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode a header record
pub fn encode_header(headers: &[&str]) -> String {
    headers
        .iter()
        .map(|header| escape_field(header))
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode a full document: the header line followed by one line per row.
///
/// With no rows the document is just the header line.
pub fn to_csv<R: AsRef<[CsvValue]>>(headers: &[&str], rows: &[R]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(encode_header(headers));
    lines.extend(rows.iter().map(|row| encode_row(row.as_ref())));
    lines.join("\n")
}

// ================================================================================================
// Tests
// ================================================================================================
