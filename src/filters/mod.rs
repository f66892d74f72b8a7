//! Predicate builders for the two filtering stages.
//!
//! [`build_record_filter`] selects records by target path, [`build_snapshot_filter`]
//! selects snapshots by creation time. Both close over their parameters once and
//! return plain `Fn` predicates.

pub mod record;
pub mod snapshot;

pub use record::build_record_filter;
pub use snapshot::{build_snapshot_filter, build_snapshot_filter_at};
