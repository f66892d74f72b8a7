//! Discovery, filtering and output of local history snapshots
//!
//! # Error Handling Strategy
//!
//! - **Discovery**: Unreadable directory entries are logged and skipped; a missing root
//!   simply yields no files.
//!
//! - **Parsing**: Each `entries.json` that fails to parse is logged as a warning and
//!   remembered in [`HistoryStreamer::skipped_files`]. Building a streamer never fails.
//!
//! - **Output**: Write failures are returned to the caller immediately, with no retry.

pub mod discovery;
pub mod history_streamer;
pub mod output;

pub use discovery::{ENTRIES_FILE_NAME, discover_history_files};
pub use history_streamer::HistoryStreamer;
pub use output::{OutputSink, format_snapshot_line};
