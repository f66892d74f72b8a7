//! Local History Parser - Stream editor local history snapshots as delimited text
//!
//! Editors keep a local history store where every tracked file has a directory with an
//! `entries.json` metadata file next to the saved snapshot contents. This library:
//!
//! - Discovers and parses every `entries.json` under a root directory
//! - Filters records by target path (regex) and snapshots by relative time windows
//! - Sorts snapshots newest- or oldest-first and optionally keeps only the first
//! - Writes `<target>,<snapshot path>,<created on>` lines to any [`std::io::Write`] sink
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use local_history_parser::{HistoryStreamer, build_record_filter, build_snapshot_filter};
//!
//! let root = Path::new("/home/alice/.config/Code/User/History");
//! let mut streamer = HistoryStreamer::new(root, std::io::stdout());
//! let record_filter = build_record_filter(Some(r"\.rs$"))?;
//! let snapshot_filter = build_snapshot_filter(Some("2 days ago"), None);
//! streamer.stream(record_filter, snapshot_filter, None)?;
//! println!("Wrote {} lines", streamer.records_written());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod filters;
pub mod models;
pub mod parsers;
pub mod streamer;
pub mod utils;

// Re-export commonly used types
pub use filters::{build_record_filter, build_snapshot_filter, build_snapshot_filter_at};
pub use models::{HistoryRecord, HistorySnapshot, SortOrder};
pub use parsers::parse_entries_file;
pub use streamer::{HistoryStreamer, discover_history_files, format_snapshot_line};
pub use utils::{parse_relative, resource_to_path};
