//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Process a batch of service request messages into inspections and
/// incident reports.
#[derive(Parser, Debug)]
#[command(name = "service-triage", version, about)]
pub struct Cli {
    /// Path to the source JSON file (an array of message objects).
    pub source: PathBuf,

    /// Output directory for the three partition files.
    #[arg(long, default_value = "build")]
    pub outdir: PathBuf,

    /// Log file path.
    #[arg(long, default_value = "var/log/app.log")]
    pub log: PathBuf,
}
