//! Batch file I/O around the pipeline: read the source JSON array,
//! write the three output partitions.
//!
//! Pure plumbing — no classification logic lives here. The processor
//! consumes and produces plain data; this module owns the files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::{OutputError, SourceError};
use crate::pipeline::types::{ProcessOutcome, RawMessage};

/// Output file names within the output directory.
pub const INSPECTIONS_FILE: &str = "inspections.json";
pub const INCIDENT_REPORTS_FILE: &str = "incident-reports.json";
pub const UNPROCESSABLE_FILE: &str = "unprocessable.json";

/// Read a JSON array of raw messages from `path`.
///
/// Array elements are taken as-is: a non-object element is still a valid
/// `RawMessage` and will fall out of the pipeline as unprocessable. Only
/// a missing file, unreadable content, or a non-array top level is an
/// error here.
pub fn read_messages(path: &Path) -> Result<Vec<RawMessage>, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    info!(path = %path.display(), "Reading source file");

    let content = fs::read_to_string(path).map_err(|source| SourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    match value {
        serde_json::Value::Array(items) => Ok(items.into_iter().map(RawMessage).collect()),
        _ => Err(SourceError::NotAnArray),
    }
}

/// Paths of the three written partition files.
#[derive(Debug)]
pub struct WrittenFiles {
    pub inspections: PathBuf,
    pub incident_reports: PathBuf,
    pub unprocessable: PathBuf,
}

/// Write the three output partitions into `outdir` as pretty-printed
/// JSON arrays, creating the directory if needed.
pub fn write_outputs(outdir: &Path, outcome: &ProcessOutcome) -> Result<WrittenFiles, OutputError> {
    fs::create_dir_all(outdir).map_err(|source| OutputError::CreateDir {
        path: outdir.to_path_buf(),
        source,
    })?;

    let files = WrittenFiles {
        inspections: outdir.join(INSPECTIONS_FILE),
        incident_reports: outdir.join(INCIDENT_REPORTS_FILE),
        unprocessable: outdir.join(UNPROCESSABLE_FILE),
    };
    write_json(&files.inspections, &outcome.inspections)?;
    write_json(&files.incident_reports, &outcome.incident_reports)?;
    write_json(&files.unprocessable, &outcome.unprocessable)?;

    info!(outdir = %outdir.display(), "Output partitions written");
    Ok(files)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })
}
