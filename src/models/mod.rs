//! Data models for editor local history.
//!
//! - [`EntriesFile`] / [`SnapshotEntry`] - raw serde shapes of `entries.json`
//! - [`HistoryRecord`] - one tracked file and all of its snapshots
//! - [`HistorySnapshot`] - one saved version of a tracked file
//! - [`SortOrder`] - newest-first or oldest-first snapshot listing
//!
//! Derived fields (target path, creation time, content path) are computed once at
//! construction and only exposed through accessors.

pub mod history;
pub mod order;

pub use history::{EntriesFile, HistoryRecord, HistorySnapshot, SnapshotEntry};
pub use order::SortOrder;
