use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::models::{HistoryRecord, HistorySnapshot, SortOrder};
use crate::parsers::parse_entries_file;
use crate::streamer::discovery::discover_history_files;
use crate::streamer::output::{OutputSink, format_snapshot_line};

/// Collected history records plus the sink that selected snapshots are written to
///
/// All records are discovered and parsed when the streamer is created; the record
/// list never changes afterwards. Only the sink and its line counter are mutable.
pub struct HistoryStreamer<W: Write> {
    records: Vec<HistoryRecord>,
    skipped_files: Vec<PathBuf>,
    sink: OutputSink<W>,
}

impl<W: Write> HistoryStreamer<W> {
    /// Discover and parse every `entries.json` under `root`
    ///
    /// Files that fail to read or parse are logged as warnings and skipped, so
    /// construction itself never fails.
    pub fn new(root: &Path, writer: W) -> Self {
        let mut records = Vec::new();
        let mut skipped_files = Vec::new();

        for history_file in discover_history_files(root) {
            match parse_entries_file(&history_file) {
                Ok(record) => {
                    debug!("Parsed {} ({} snapshot(s))", history_file.display(), record.len());
                    records.push(record);
                }
                Err(e) => {
                    warn!(
                        "Failed to parse local history file {}: {:#}",
                        history_file.display(),
                        e
                    );
                    skipped_files.push(history_file);
                }
            }
        }

        Self { records, skipped_files, sink: OutputSink::new(writer) }
    }

    /// All parsed records, in discovery order
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    /// Metadata files that were found but could not be parsed
    pub fn skipped_files(&self) -> &[PathBuf] {
        &self.skipped_files
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of lines written so far
    pub fn records_written(&self) -> usize {
        self.sink.lines_written()
    }

    /// Records matching `predicate`, sorted by target path
    pub fn filter_records<F>(&self, predicate: F) -> Vec<&HistoryRecord>
    where
        F: Fn(&HistoryRecord) -> bool,
    {
        select_records(&self.records, predicate)
    }

    /// Snapshots of `record` matching `predicate`, sorted by timestamp
    ///
    /// Oldest-first for [`SortOrder::Oldest`], newest-first otherwise. The receiver is
    /// not consulted; `record` may come from any streamer, and the method sits here
    /// alongside [`HistoryStreamer::filter_records`].
    pub fn filter_snapshots<'r, F>(
        &self,
        record: &'r HistoryRecord,
        predicate: F,
        order: Option<SortOrder>,
    ) -> Vec<&'r HistorySnapshot>
    where
        F: Fn(&HistorySnapshot) -> bool,
    {
        select_snapshots(record, predicate, order)
    }

    /// Write `line` plus a newline to the sink and count it
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the write.
    pub fn write(&mut self, line: &str) -> Result<()> {
        self.sink.write_line(line)
    }

    /// Run both filter stages and write one line per selected snapshot
    ///
    /// Records are visited in target-path order. With an explicit `order`, only the
    /// first snapshot of each record (oldest or newest) is written.
    ///
    /// # Errors
    ///
    /// Returns an error as soon as a write fails.
    pub fn stream<R, S>(
        &mut self,
        record_filter: R,
        snapshot_filter: S,
        order: Option<SortOrder>,
    ) -> Result<()>
    where
        R: Fn(&HistoryRecord) -> bool,
        S: Fn(&HistorySnapshot) -> bool,
    {
        let records = select_records(&self.records, record_filter);
        info!("Filtered {} history record(s)", records.len());

        for record in records {
            info!("Processing history record: {}", record.source_file().display());
            debug!("{}", record);
            info!(
                "Found {} history snapshot(s) for {}",
                record.len(),
                record.target_file().display()
            );

            let snapshots = select_snapshots(record, &snapshot_filter, order);
            info!("Filtered {} history snapshot(s)", snapshots.len());

            for snapshot in snapshots {
                info!("Processing history snapshot: {}", snapshot.source_file().display());
                debug!("{}", snapshot);

                self.sink.write_line(&format_snapshot_line(record, snapshot))?;

                if order.is_some() {
                    debug!("Stopping after a single history snapshot");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Flush the underlying sink
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()
    }

    /// Consume the streamer and hand back its sink
    pub fn into_writer(self) -> W {
        self.sink.into_inner()
    }
}

fn select_records<F>(records: &[HistoryRecord], predicate: F) -> Vec<&HistoryRecord>
where
    F: Fn(&HistoryRecord) -> bool,
{
    let mut matched: Vec<&HistoryRecord> =
        records.iter().filter(|&record| predicate(record)).collect();
    matched.sort_by(|a, b| a.target_file().as_os_str().cmp(b.target_file().as_os_str()));
    matched
}

fn select_snapshots<F>(
    record: &HistoryRecord,
    predicate: F,
    order: Option<SortOrder>,
) -> Vec<&HistorySnapshot>
where
    F: Fn(&HistorySnapshot) -> bool,
{
    let mut matched: Vec<&HistorySnapshot> =
        record.snapshots().iter().filter(|&snapshot| predicate(snapshot)).collect();

    match order.unwrap_or_default() {
        SortOrder::Oldest => matched.sort_by_key(|s| s.timestamp()),
        SortOrder::Newest => matched.sort_by(|a, b| b.timestamp().cmp(&a.timestamp())),
    }
    matched
}
