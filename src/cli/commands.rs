use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;

use crate::cli::logging::init_logging;
use crate::filters::{build_record_filter, build_snapshot_filter};
use crate::models::SortOrder;
use crate::streamer::HistoryStreamer;

#[derive(Parser, Debug)]
#[command(name = "lhp")]
#[command(version)]
#[command(about = "Parse local history files", long_about = None)]
pub struct Cli {
    /// Path to storage location of local history files
    pub path: PathBuf,

    /// Where to store the local history results (default: stdout)
    pub file: Option<PathBuf>,

    /// Increase output verbosity (can be used multiple times)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable output verbosity
    #[arg(short, long)]
    pub quiet: bool,

    /// Show only the oldest snapshot
    #[arg(short, long, conflicts_with = "newest", help_heading = "Snapshot filters")]
    pub oldest: bool,

    /// Show only the newest snapshot
    #[arg(short, long, help_heading = "Snapshot filters")]
    pub newest: bool,

    /// Show snapshots of files whose path matches the regular expression
    #[arg(short, long, value_name = "REGEX", help_heading = "Snapshot filters")]
    pub regex: Option<String>,

    /// Show snapshots newer than the relative time, e.g. "3 days ago"
    #[arg(short, long, value_name = "WHEN", help_heading = "Snapshot filters")]
    pub since: Option<String>,

    /// Show snapshots older than the relative time, e.g. "1 hour ago"
    #[arg(short, long, value_name = "WHEN", help_heading = "Snapshot filters")]
    pub until: Option<String>,
}

impl Cli {
    /// 0 when quiet, otherwise 1 plus the number of `-v` flags
    pub fn verbosity(&self) -> u8 {
        if self.quiet { 0 } else { self.verbose.saturating_add(1) }
    }

    pub fn order(&self) -> Option<SortOrder> {
        if self.oldest {
            Some(SortOrder::Oldest)
        } else if self.newest {
            Some(SortOrder::Newest)
        } else {
            None
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());
    execute(&cli)
}

/// Scan, filter and write history for already-parsed arguments
pub fn execute(cli: &Cli) -> Result<()> {
    // Reject a bad pattern before touching the output file
    let record_filter = build_record_filter(cli.regex.as_deref())?;

    let writer = open_output(cli.file.as_deref())?;
    let mut streamer = HistoryStreamer::new(&cli.path, writer);
    info!("Found {} history record(s) at {}", streamer.len(), cli.path.display());

    let snapshot_filter = build_snapshot_filter(cli.since.as_deref(), cli.until.as_deref());
    streamer.stream(record_filter, snapshot_filter, cli.order())?;
    streamer.flush()?;

    info!("Pushed {} history record(s) to stream", streamer.records_written());
    Ok(())
}

fn open_output(file: Option<&Path>) -> Result<Box<dyn Write>> {
    match file {
        Some(path) if path != Path::new("-") => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        _ => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
