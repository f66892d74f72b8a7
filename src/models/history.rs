use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::utils::resource_to_path;

/// Raw shape of an `entries.json` metadata file
#[derive(Debug, Clone, Deserialize)]
pub struct EntriesFile {
    pub version: i64,
    pub resource: String,
    #[serde(default)]
    pub entries: Vec<SnapshotEntry>,
}

/// Raw shape of one element of the `entries` array
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotEntry {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_snapshot_id")]
    pub id: String,
    pub timestamp: i64,
    #[serde(default)]
    pub source: Option<String>,
}

/// One saved version of a tracked file.
///
/// `created_on` and `source_file` are derived once in [`HistorySnapshot::new`] and
/// cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySnapshot {
    id: String,
    timestamp: i64,
    source: Option<String>,
    created_on: DateTime<Utc>,
    source_file: PathBuf,
}

impl HistorySnapshot {
    /// Build a snapshot whose content lives in `dir`
    ///
    /// # Errors
    ///
    /// Returns an error if `timestamp` (milliseconds) is outside chrono's supported range.
    pub fn new(entry: SnapshotEntry, dir: &Path) -> Result<Self> {
        let created_on = DateTime::from_timestamp_millis(entry.timestamp)
            .with_context(|| format!("Snapshot timestamp out of range: {}", entry.timestamp))?;
        let source_file = dir.join(&entry.id);

        Ok(Self {
            id: entry.id,
            timestamp: entry.timestamp,
            source: entry.source,
            created_on,
            source_file,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Milliseconds since the Unix epoch, as recorded by the editor
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    /// Path to the snapshot's saved content
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }
}

impl fmt::Display for HistorySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HistorySnapshot(created_on={})", self.created_on)
    }
}

/// Metadata for one tracked file, parsed from a single `entries.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    version: i64,
    resource: String,
    source_file: PathBuf,
    target_file: PathBuf,
    snapshots: Vec<HistorySnapshot>,
}

impl HistoryRecord {
    /// Build a record from parsed metadata read from `path`
    ///
    /// Every snapshot is anchored to the directory holding `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resource URI has no usable path or any snapshot
    /// timestamp is out of range.
    pub fn new(file: EntriesFile, path: &Path) -> Result<Self> {
        let target_file = resource_to_path(&file.resource)?;
        let dir = path.parent().unwrap_or_else(|| Path::new(""));

        let snapshots = file
            .entries
            .into_iter()
            .map(|entry| HistorySnapshot::new(entry, dir))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            version: file.version,
            resource: file.resource,
            source_file: path.to_path_buf(),
            target_file,
            snapshots,
        })
    }

    pub fn version(&self) -> i64 {
        self.version
    }

    /// URI of the tracked file, as stored in the metadata
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Path of the metadata file this record was parsed from
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    /// Filesystem path of the tracked file
    pub fn target_file(&self) -> &Path {
        &self.target_file
    }

    pub fn snapshots(&self) -> &[HistorySnapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HistoryRecord(version={}, resource={})", self.version, self.resource)
    }
}
