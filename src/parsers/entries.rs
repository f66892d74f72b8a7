use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{EntriesFile, HistoryRecord};
use crate::utils::validate_file_size;

/// Parse an `entries.json` metadata file into a [`HistoryRecord`]
///
/// # Errors
///
/// Returns an error if the file cannot be opened, exceeds the size limit, is not
/// valid JSON, lacks a required field, or describes an unusable resource/snapshot.
pub fn parse_entries_file(path: &Path) -> Result<HistoryRecord> {
    // Open file and validate size to avoid TOCTOU race condition
    let file = File::open(path)
        .with_context(|| format!("Failed to open history file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let contents: EntriesFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse history file: {}", path.display()))?;

    HistoryRecord::new(contents, path)
        .with_context(|| format!("Invalid history record in {}", path.display()))
}
