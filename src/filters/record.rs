use anyhow::{Context, Result};
use regex::RegexBuilder;

use crate::models::HistoryRecord;

/// Build a record predicate from an optional target-path pattern
///
/// The pattern is compiled case-insensitively and may match anywhere in the
/// record's target path. Without a pattern every record matches.
///
/// # Errors
///
/// Returns an error immediately if the pattern is not a valid regular expression.
pub fn build_record_filter(
    regex: Option<&str>,
) -> Result<impl Fn(&HistoryRecord) -> bool + use<>> {
    let pattern = regex
        .map(|r| {
            RegexBuilder::new(r)
                .case_insensitive(true)
                .build()
                .with_context(|| format!("Invalid regular expression: {}", r))
        })
        .transpose()?;

    Ok(move |record: &HistoryRecord| match &pattern {
        Some(pattern) => pattern.is_match(&record.target_file().to_string_lossy()),
        None => true,
    })
}
