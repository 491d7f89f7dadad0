/*!
# Bulk File Archive

Packs the four rendered tables of a [`CampaignBundle`] into one zip archive, and reads such an
archive back.

Entries are deflate-compressed and stamped with the DOS epoch (1980-01-01 00:00:00) instead
of the wall clock, so the same bundle always produces the same bytes.
*/

use crate::ad_copy::CampaignBundle;
use std::io::{Cursor, Read, Write};
use zip::{write::SimpleFileOptions, CompressionMethod, DateTime, ZipArchive, ZipWriter};

/// Suggested download name
pub const ARCHIVE_FILE_NAME: &str = "google-ads-search.zip";

pub const ARCHIVE_CONTENT_TYPE: &str = "application/zip";

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error(transparent)]
    Zip(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Archive entry {0} is not valid UTF-8")]
    NonUtf8Entry(String),
}

pub type ArchiveResult<T> = std::result::Result<T, ArchiveError>;

/// One named text entry read back from an archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub text: String,
}

/// Write every table of `bundle` into a zip archive and return its bytes.
///
/// The bytes are only returned once the central directory has been written.
pub fn build_archive(bundle: &CampaignBundle) -> ArchiveResult<Vec<u8>> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for file in bundle.to_csv_files() {
        writer.start_file(file.name, options)?;
        writer.write_all(file.text.as_bytes())?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

/// Read every entry of a zip archive as UTF-8 text, in archive order
pub fn read_archive(bytes: &[u8]) -> ArchiveResult<Vec<ArchiveEntry>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        let name = file.name().to_string();

        let mut raw = Vec::new();
        file.read_to_end(&mut raw)?;
        let text = String::from_utf8(raw).map_err(|_| ArchiveError::NonUtf8Entry(name.clone()))?;

        entries.push(ArchiveEntry { name, text });
    }

    Ok(entries)
}
