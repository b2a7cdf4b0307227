// End-to-end pipeline tests: filter -> persist -> extract, and diff pass-through

use anyhow::Result;
use scanwatch::engine::{self, session};
use std::fs;
use tempfile::TempDir;

const RAW_TWO_HOSTS: &str = "\
Starting Nmap 7.94 ( https://nmap.org ) at 2026-08-29 10:00 UTC
Initiating Ping Scan at 10:00
Nmap scan report for 10.0.0.1
Host is up (0.00034s latency).
Nmap scan report for 10.0.0.7
Host is up (0.0021s latency).
Nmap done: 2 IP addresses (2 hosts up) scanned in 0.10 seconds
";

#[test]
fn two_host_blocks_end_to_end() -> Result<()> {
    let dir = TempDir::new()?;

    let report = engine::filter_report(RAW_TWO_HOSTS);
    let (sequence, path) = session::next_scan_path(dir.path())?;
    session::write_scan(&path, &report)?;
    let hosts = engine::discovered_hosts(&report);

    assert_eq!(sequence, 1);
    assert_eq!(hosts, vec!["10.0.0.1", "10.0.0.7"]);

    // Exactly two lines plus the trailing newline
    let written = fs::read_to_string(&path)?;
    assert_eq!(written, "10.0.0.1 [host up]\n10.0.0.7 [host up]\n");
    assert_eq!(written.lines().count(), 2);
    assert!(written.ends_with('\n'));
    Ok(())
}

#[test]
fn zero_matches_writes_newline_only_file() -> Result<()> {
    let dir = TempDir::new()?;

    let report = engine::filter_report("Nmap done: 0 IP addresses scanned\n");
    let (_, path) = session::next_scan_path(dir.path())?;
    session::write_scan(&path, &report)?;

    assert_eq!(fs::read_to_string(&path)?, "\n");
    assert!(engine::discovered_hosts(&report).is_empty());
    Ok(())
}

#[test]
fn diff_of_consecutive_scans_shows_the_change() -> Result<()> {
    let dir = TempDir::new()?;
    let previous = dir.path().join("scan_2.txt");
    let current = dir.path().join("scan_3.txt");
    fs::write(&previous, "10.0.0.1 [host up]\n")?;
    fs::write(&current, "10.0.0.1 [host up]\n10.0.0.7 [host up]\n")?;

    // diff exits 1 when files differ; that is output, not an error
    let output = engine::diff_scans("diff", &previous, &current)?;
    assert!(output.contains("10.0.0.7"), "diff output was: {output}");
    Ok(())
}

#[test]
fn identical_scans_diff_to_empty_output() -> Result<()> {
    let dir = TempDir::new()?;
    let previous = dir.path().join("scan_1.txt");
    let current = dir.path().join("scan_2.txt");
    fs::write(&previous, "10.0.0.1 [host up]\n")?;
    fs::write(&current, "10.0.0.1 [host up]\n")?;

    let output = engine::diff_scans("diff", &previous, &current)?;
    assert!(output.is_empty());
    Ok(())
}

#[test]
fn missing_predecessor_surfaces_the_tools_error_text() -> Result<()> {
    let dir = TempDir::new()?;
    let current = dir.path().join("scan_1.txt");
    fs::write(&current, "10.0.0.1 [host up]\n")?;

    // scan_1's predecessor is scan_0, which never exists
    let previous = session::previous_scan_path(&current).unwrap();
    assert_eq!(previous.file_name().unwrap(), "scan_0.txt");

    let output = engine::diff_scans("diff", &previous, &current)?;
    assert!(output.contains("scan_0.txt"), "diff output was: {output}");
    Ok(())
}

#[test]
fn missing_diff_program_is_a_spawn_error() {
    let result = engine::diff_scans(
        "scanwatch-no-such-diff-tool",
        std::path::Path::new("a"),
        std::path::Path::new("b"),
    );
    assert!(result.is_err());
}
