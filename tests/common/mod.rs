//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test local history directory structures
pub struct HistoryDirBuilder {
    temp_dir: TempDir,
}

impl HistoryDirBuilder {
    /// Create a new builder with an empty history root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the history root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a record directory containing an `entries.json` built from `record`
    pub fn with_record(self, dir_name: &str, record: &RecordBuilder) -> Self {
        self.with_raw_entries(dir_name, &record.to_json())
    }

    /// Add a record directory whose `entries.json` has exactly `content`
    pub fn with_raw_entries(self, dir_name: &str, content: &str) -> Self {
        let record_dir = self.temp_dir.path().join(dir_name);
        fs::create_dir_all(&record_dir).expect("Failed to create record dir");
        fs::write(record_dir.join("entries.json"), content).expect("Failed to write entries.json");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HistoryDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `entries.json` contents
pub struct RecordBuilder {
    version: i64,
    resource: String,
    entries: Vec<SnapshotBuilder>,
}

impl RecordBuilder {
    /// Create a record for the given resource URI with no snapshots
    pub fn new(resource: &str) -> Self {
        Self { version: 1, resource: resource.to_string(), entries: Vec::new() }
    }

    /// Set the schema version
    pub fn version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    /// Add a snapshot entry
    pub fn with_snapshot(mut self, snapshot: SnapshotBuilder) -> Self {
        self.entries.push(snapshot);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let entries = self.entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join(",");
        format!(
            r#"{{"version":{},"resource":"{}","entries":[{}]}}"#,
            self.version, self.resource, entries
        )
    }
}

/// Builder for one element of the `entries` array
pub struct SnapshotBuilder {
    id: String,
    timestamp: i64,
    source: Option<String>,
}

impl SnapshotBuilder {
    pub fn new(id: &str, timestamp: i64) -> Self {
        Self { id: id.to_string(), timestamp, source: None }
    }

    /// Set the provenance string
    pub fn source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let source_field =
            self.source.as_ref().map(|s| format!(r#","source":"{}""#, s)).unwrap_or_default();

        format!(r#"{{"id":"{}","timestamp":{}{}}}"#, self.id, self.timestamp, source_field)
    }
}

/// Millisecond timestamp `seconds_ago` seconds before the current time
pub fn millis_ago(seconds_ago: i64) -> i64 {
    chrono::Utc::now().timestamp_millis() - seconds_ago * 1000
}

/// Path of a snapshot's content file inside the history root
pub fn snapshot_path(root: &Path, dir_name: &str, id: &str) -> PathBuf {
    root.join(dir_name).join(id)
}

/// Helper to create a history root with three records of mixed file types
pub fn realistic_history_dir() -> TempDir {
    HistoryDirBuilder::new()
        .with_record(
            "-1a2b3c",
            &RecordBuilder::new("file:///home/user/project/app.py")
                .with_snapshot(SnapshotBuilder::new("AbC1.py", 1_000).source("Workspace Edit"))
                .with_snapshot(SnapshotBuilder::new("DeF2.py", 3_000))
                .with_snapshot(SnapshotBuilder::new("GhI3.py", 2_000).source("Undo")),
        )
        .with_record(
            "5e6f7a8b",
            &RecordBuilder::new("file:///home/user/project/README.md")
                .with_snapshot(SnapshotBuilder::new("JkL4.md", 4_000)),
        )
        .with_record(
            "nested/deeper/9c0d",
            &RecordBuilder::new("file:///home/user/lib/util.rs")
                .with_snapshot(SnapshotBuilder::new("MnO5.rs", 5_000))
                .with_snapshot(SnapshotBuilder::new("PqR6.rs", 6_000)),
        )
        .build()
}
