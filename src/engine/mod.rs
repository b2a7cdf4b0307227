// Scan engine - independent of UI

pub mod diff;
pub mod filter;
pub mod nmap;
pub mod session;

pub use diff::diff_scans;
pub use filter::{discovered_hosts, filter_report};
pub use nmap::{nmap_version, run_discovery};
pub use session::{next_scan_path, previous_scan_path, scan_filename, write_scan};

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// A completed scan: its sequence slot, persisted file, and parsed results.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub sequence: u32,
    pub filename: String,
    pub path: PathBuf,
    pub report: String,
    pub hosts: Vec<String>,
}

/// Run the full scan pipeline: pick the next `scan_<N>.txt` slot, invoke
/// nmap, filter the output, persist it, and extract discovered hosts.
///
/// The TUI composes the same steps itself so it can drop a cancelled scan
/// between the command returning and the file being written.
pub fn run_scan(program: &str, target: &str, dir: &Path) -> Result<ScanOutcome> {
    let (sequence, path) = session::next_scan_path(dir)?;
    let raw = nmap::run_discovery(program, target)?;
    let report = filter::filter_report(&raw);
    session::write_scan(&path, &report)?;
    let hosts = filter::discovered_hosts(&report);

    info!(target, sequence, hosts = hosts.len(), "scan saved");

    Ok(ScanOutcome {
        sequence,
        filename: session::scan_filename(sequence),
        path,
        report,
        hosts,
    })
}

/// One live-monitor pass: scan each target sequentially and return one
/// filtered block per target, in target order. Nothing is persisted.
///
/// A failure to run the tool for one target becomes that target's block
/// text; there is no per-target recovery beyond what nmap itself reports
/// inline.
pub fn monitor_pass(program: &str, targets: &[String]) -> Vec<String> {
    targets
        .iter()
        .map(|target| match nmap::run_discovery(program, target) {
            Ok(raw) => {
                let block = filter::filter_report(&raw);
                block.trim_end_matches('\n').to_string()
            }
            Err(e) => format!("{e:#}"),
        })
        .collect()
}
