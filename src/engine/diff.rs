// External diff invocation

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Diff the predecessor scan against the current one and return the tool's
/// raw output, stdout and stderr combined.
///
/// diff exits 1 when the files differ and 2 on trouble (such as a missing
/// predecessor); both are displayable output rather than errors, so the exit
/// status is ignored. Only a failure to spawn the tool is an `Err`.
pub fn diff_scans(program: &str, previous: &Path, current: &Path) -> Result<String> {
    debug!(previous = %previous.display(), current = %current.display(), "running diff");

    let output = Command::new(program)
        .arg(previous)
        .arg(current)
        .output()
        .with_context(|| format!("Failed to execute {program}. Is it installed and in PATH?"))?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.stderr.is_empty() {
        text.push_str(&String::from_utf8_lossy(&output.stderr));
    }

    Ok(text)
}
