// Scan file bookkeeping
//
// Each completed scan is written to `scan_<N>.txt` in the scan directory.
// N is one more than the highest number already present, starting at 1.
// The predecessor of `scan_N.txt` is assumed to be `scan_<N-1>.txt` by
// filename arithmetic; files deleted out of order simply make the diff
// target a missing file, which the diff tool reports itself.

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

fn scan_file_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^scan_(\d+)\.txt$").expect("scan filename pattern"))
}

/// Parse the sequence number out of a `scan_<N>.txt` filename.
pub fn sequence_of(filename: &str) -> Option<u32> {
    scan_file_re()
        .captures(filename)
        .and_then(|caps| caps[1].parse().ok())
}

pub fn scan_filename(sequence: u32) -> String {
    format!("scan_{sequence}.txt")
}

/// Compute the next scan sequence number for a directory.
///
/// Lists entries matching `scan_<integer>.txt` and returns max + 1, or 1
/// when none exist. Unrelated files are ignored.
pub fn next_sequence(dir: &Path) -> Result<u32> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list scan directory: {}", dir.display()))?;

    let max = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().to_str().and_then(sequence_of))
        .max();

    Ok(max.map_or(1, |n| n + 1))
}

/// Next scan file path for a directory, with its sequence number.
pub fn next_scan_path(dir: &Path) -> Result<(u32, PathBuf)> {
    let sequence = next_sequence(dir)?;
    let path = dir.join(scan_filename(sequence));
    debug!(sequence, path = %path.display(), "next scan file");
    Ok((sequence, path))
}

/// Path of the assumed predecessor, `scan_<N-1>.txt` in the same directory.
///
/// `scan_1.txt` yields `scan_0.txt`, which never exists; the diff tool's own
/// missing-file error is the intended display for that case.
pub fn previous_scan_path(current: &Path) -> Option<PathBuf> {
    let sequence = current.file_name().and_then(|name| name.to_str()).and_then(sequence_of)?;
    let previous = scan_filename(sequence.wrapping_sub(1));
    Some(match current.parent() {
        Some(dir) => dir.join(previous),
        None => PathBuf::from(previous),
    })
}

/// Write a filtered report verbatim, overwriting any existing file.
pub fn write_scan(path: &Path, report: &str) -> Result<()> {
    fs::write(path, report)
        .with_context(|| format!("Failed to write scan file: {}", path.display()))
}
