use std::io::Write;

use anyhow::{Context, Result};
use chrono::SecondsFormat;

use crate::models::{HistoryRecord, HistorySnapshot};

/// Line-oriented sink that counts what it writes
pub struct OutputSink<W: Write> {
    writer: W,
    lines_written: usize,
}

impl<W: Write> OutputSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, lines_written: 0 }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Append `line` and a newline; the counter only moves on success
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).context("Failed to write to output stream")?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush output stream")
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render one output line: `<target>,<snapshot content path>,<created on>`
///
/// Fields are not quoted or escaped. The timestamp is RFC 3339 UTC, with fractional
/// seconds only when they are non-zero.
pub fn format_snapshot_line(record: &HistoryRecord, snapshot: &HistorySnapshot) -> String {
    format!(
        "{},{},{}",
        record.target_file().display(),
        snapshot.source_file().display(),
        snapshot.created_on().to_rfc3339_opts(SecondsFormat::AutoSi, true)
    )
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::models::{EntriesFile, SnapshotEntry};

    fn record_with(timestamp: i64) -> HistoryRecord {
        let file = EntriesFile {
            version: 1,
            resource: "file:///a/b.py".to_string(),
            entries: vec![SnapshotEntry { id: "Ab1.py".to_string(), timestamp, source: None }],
        };
        HistoryRecord::new(file, Path::new("/h/x/entries.json")).unwrap()
    }

    #[test]
    fn test_format_line_whole_seconds() {
        let record = record_with(1000);
        let line = format_snapshot_line(&record, &record.snapshots()[0]);
        assert_eq!(line, "/a/b.py,/h/x/Ab1.py,1970-01-01T00:00:01Z");
    }

    #[test]
    fn test_format_line_fractional_seconds() {
        let record = record_with(1500);
        let line = format_snapshot_line(&record, &record.snapshots()[0]);
        assert_eq!(line, "/a/b.py,/h/x/Ab1.py,1970-01-01T00:00:01.500Z");
    }

    #[test]
    fn test_sink_counts_lines() {
        let mut sink = OutputSink::new(Vec::new());
        sink.write_line("a,b,c").unwrap();
        sink.write_line("").unwrap();
        assert_eq!(sink.lines_written(), 2);
        assert_eq!(sink.into_inner(), b"a,b,c\n\n".to_vec());
    }
}
