use dealer_search_sdk::{csvs::CsvError, ArchiveError, BuildError, InventoryError};
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),

    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    #[error("Build failed: {0}")]
    Build(#[from] BuildError),

    #[error("Invalid archive: {0}")]
    InvalidArchive(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
