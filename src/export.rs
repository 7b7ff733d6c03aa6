// src/export.rs
use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::{
    config::consts::{CSV_HEADER, EXPORT_EXT, EXPORT_PREFIX},
    core::sanitize::filename_timestamp,
    csv,
    error::ExportError,
    host::FileSaver,
};

/// A finished export: what was written and where the host put it.
/// `filename` is the name actually used, which may carry a ` (n)` suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exported {
    pub filename: String,
    pub path: PathBuf,
    pub count: usize,
}

/// `Profile URL` header, then one profile per line.
/// Profiles are canonical URLs, so no cell ever needs quoting.
pub fn to_csv(snapshot: &[String]) -> String {
    csv::single_column(CSV_HEADER, snapshot)
}

/// `linkedin_profiles_<timestamp>.csv`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("{EXPORT_PREFIX}{}.{EXPORT_EXT}", filename_timestamp(now))
}

/// Serialize `snapshot` and hand it to the host's file saver.
pub fn export_snapshot(
    snapshot: &[String],
    saver: &mut dyn FileSaver,
    now: DateTime<Utc>,
) -> Result<Exported, ExportError> {
    let suggested = export_filename(now);
    let contents = to_csv(snapshot);
    let path = saver.save(&suggested, contents.as_bytes())?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or(suggested);
    Ok(Exported { filename, path, count: snapshot.len() })
}
