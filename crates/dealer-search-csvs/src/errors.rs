use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Schema validation error: {0}")]
    SchemaValidation(String),

    #[error("Missing required header: {0}")]
    MissingHeader(String),

    #[error("Unknown table file: {0}")]
    UnknownTable(String),
}
