//! Parsers for editor local history metadata
//!
//! # Error Handling Strategy
//!
//! Parsing works one `entries.json` at a time and is all-or-nothing per file:
//!
//! - **File-level failures**: Unreadable files, malformed JSON, missing required fields,
//!   unusable resource URIs or out-of-range timestamps make [`parse_entries_file`] return
//!   an error with the offending path in its context.
//!
//! - **Recovery is the caller's job**: The streamer turns each error into a warning and
//!   skips the file, so one bad record never hides the rest of the store.

pub mod deserializers;
pub mod entries;

pub use entries::parse_entries_file;
