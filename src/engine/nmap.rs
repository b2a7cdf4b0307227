// External nmap invocation

use anyhow::{Context, Result};
use std::process::Command;
use tracing::{debug, info};

/// Check that nmap is available and return its version line.
pub fn nmap_version(program: &str) -> Result<String> {
    let output = Command::new(program)
        .arg("--version")
        .output()
        .with_context(|| format!("Failed to execute {program}. Is nmap installed and in PATH?"))?;

    if !output.status.success() {
        anyhow::bail!("{program} --version failed with status: {}", output.status);
    }

    let version_output = String::from_utf8_lossy(&output.stdout);
    let first_line = version_output.lines().next().unwrap_or("Unknown version");

    Ok(first_line.to_string())
}

/// Run a host-discovery scan (`-sn -n -v`: no port scan, no DNS, verbose)
/// against a target and return combined stdout + stderr text.
///
/// The target string is passed verbatim; nmap's own diagnostics for a
/// malformed target come back in the output and fall out of the filter.
/// A non-zero exit is not an error here for the same reason. No timeout is
/// enforced; a hung nmap blocks the calling thread.
pub fn run_discovery(program: &str, target: &str) -> Result<String> {
    info!(target, "starting discovery scan");

    let output = Command::new(program)
        .args(["-sn", "-n", "-v"])
        .arg(target)
        .output()
        .with_context(|| format!("Failed to execute {program}. Is nmap installed and in PATH?"))?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.stderr.is_empty() {
        text.push_str(&String::from_utf8_lossy(&output.stderr));
    }

    debug!(target, status = %output.status, bytes = text.len(), "discovery scan finished");
    Ok(text)
}
