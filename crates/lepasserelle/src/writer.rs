// Report Writer
//
// *L'Écrivain* (The Writer) - Serializes the report and puts it on disk in one step

use crate::errors::{Result, TreeHopperError};
use lechemin::Report;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialize a report to JSON, with a trailing newline
pub fn render_report(report: &Report, pretty: bool) -> Result<String> {
    let mut json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    json.push('\n');
    Ok(json)
}

/// Write a report to `path`.
///
/// Parent directories are created as needed. The document goes to a sibling
/// temporary file first and is renamed into place, so an existing report is
/// either fully replaced or left untouched.
pub fn write_report(report: &Report, path: &Path, pretty: bool) -> Result<()> {
    let json = render_report(report, pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| TreeHopperError::io_error("Failed to create report directory", parent, e))?;
    }

    let staging = staging_path(path);
    if let Err(e) = fs::write(&staging, json) {
        let _ = fs::remove_file(&staging);
        return Err(TreeHopperError::io_error("Failed to write report", &staging, e));
    }

    if let Err(e) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(TreeHopperError::io_error("Failed to move report into place", path, e));
    }

    tracing::info!("Report written to {}", path.display());
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".tmp");
    path.with_file_name(name)
}
