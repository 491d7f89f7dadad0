use crate::error::{CliError, CliResult};
use dealer_search_sdk::{
    csvs::{read_table, TableKind},
    read_archive,
};
use std::path::PathBuf;

/// List the entries of a built archive, validating each against its schema
pub fn execute(archive: PathBuf) -> CliResult<()> {
    let bytes = std::fs::read(&archive)?;
    let entries = read_archive(&bytes)?;

    println!("Archive: {}", archive.display());
    for entry in &entries {
        let kind: TableKind = entry.name.parse()?;
        let rows = read_table(kind, &entry.text)?;
        println!(
            "  {:<14} {:>5} rows, {:>2} columns",
            entry.name,
            rows.len(),
            kind.headers().len()
        );
    }

    let missing: Vec<&str> = TableKind::ALL
        .iter()
        .map(|kind| kind.file_name())
        .filter(|name| !entries.iter().any(|entry| entry.name == *name))
        .collect();
    if !missing.is_empty() {
        return Err(CliError::InvalidArchive(format!(
            "missing {}",
            missing.join(", ")
        )));
    }

    println!("All {} bulk files present and valid", TableKind::ALL.len());
    Ok(())
}
