// Output filtering for nmap host discovery
//
// Only two line prefixes of nmap's verbose output are recognized; everything
// else is dropped. This is a contract with `nmap -sn -n -v`, not a parser.

use regex::Regex;
use std::sync::OnceLock;

/// Line announcing a host's address in nmap verbose output
pub const REPORT_PREFIX: &str = "Nmap scan report for ";

/// Line announcing liveness, optionally followed by a latency annotation
pub const UP_PREFIX: &str = "Host is up";

/// Marker joined onto a report line when its host answered
pub const UP_MARKER: &str = "[host up]";

fn latency_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" \(\d+\.\d+s latency\)\.").expect("latency pattern"))
}

/// Strip a trailing ` (<float>s latency).` annotation from anywhere in the text.
pub fn strip_latency(text: &str) -> String {
    latency_re().replace_all(text, "").into_owned()
}

/// Reduce raw nmap output to one line per discovered host.
///
/// Keeps only report/host-up lines, strips latency annotations, folds each
/// host-up line onto its preceding report line as ` [host up]`, drops the
/// report prefix, and appends a trailing newline. Zero matching lines still
/// yield a single newline so the scan file is never empty.
pub fn filter_report(raw: &str) -> String {
    let kept: Vec<&str> = raw
        .lines()
        .filter(|line| line.starts_with(REPORT_PREFIX) || line.starts_with(UP_PREFIX))
        .collect();

    let mut report = strip_latency(&kept.join("\n"));
    report = report.replace("\nHost is up", &format!(" {UP_MARKER}"));
    report = report.replace(REPORT_PREFIX, "");
    report.push('\n');
    report
}

/// Extract host identifiers from a filtered report, in line order.
///
/// A host line looks like `203.0.113.5 [host up]`; the identifier is the
/// substring before the first space. Duplicates are kept.
pub fn discovered_hosts(report: &str) -> Vec<String> {
    report
        .lines()
        .filter(|line| line.find("host up").is_some_and(|pos| pos > 0))
        .filter_map(|line| line.split(' ').next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW_TWO_HOSTS: &str = "\
Starting Nmap 7.94 ( https://nmap.org ) at 2026-08-29 10:00 UTC
Initiating Ping Scan at 10:00
Scanning 2 hosts [4 ports/host]
Completed Ping Scan at 10:00, 0.05s elapsed (2 total hosts)
Nmap scan report for 10.0.0.1
Host is up (0.00034s latency).
Nmap scan report for 203.0.113.5
Host is up (0.0012s latency).
Read data files from: /usr/bin/../share/nmap
Nmap done: 2 IP addresses (2 hosts up) scanned in 0.10 seconds
";

    #[test]
    fn filter_keeps_one_line_per_host() {
        let report = filter_report(RAW_TWO_HOSTS);
        assert_eq!(report, "10.0.0.1 [host up]\n203.0.113.5 [host up]\n");
    }

    #[test]
    fn latency_annotation_is_stripped() {
        let raw = "Nmap scan report for 10.0.0.1\nHost is up (0.00034s latency).\n";
        assert_eq!(filter_report(raw), "10.0.0.1 [host up]\n");
    }

    #[test]
    fn host_without_latency_annotation_still_folds() {
        let raw = "Nmap scan report for 10.0.0.1\nHost is up.\n";
        assert_eq!(filter_report(raw), "10.0.0.1 [host up].\n");
    }

    #[test]
    fn down_host_keeps_report_line_without_marker() {
        let raw = "\
Nmap scan report for 10.0.0.1
Host is up (0.001s latency).
Nmap scan report for 10.0.0.2 [host down]
";
        let report = filter_report(raw);
        assert_eq!(report, "10.0.0.1 [host up]\n10.0.0.2 [host down]\n");
        assert_eq!(discovered_hosts(&report), vec!["10.0.0.1"]);
    }

    #[test]
    fn zero_matching_lines_yields_single_newline() {
        let report = filter_report("Nmap done: 0 IP addresses scanned\n");
        assert_eq!(report, "\n");
        assert!(discovered_hosts(&report).is_empty());
    }

    #[test]
    fn host_extraction_round_trip() {
        assert_eq!(
            discovered_hosts("203.0.113.5 [host up]\n"),
            vec!["203.0.113.5"]
        );
    }

    #[test]
    fn extraction_preserves_order_and_duplicates() {
        let report = "10.0.0.2 [host up]\n10.0.0.1 [host up]\n10.0.0.2 [host up]\n";
        assert_eq!(
            discovered_hosts(report),
            vec!["10.0.0.2", "10.0.0.1", "10.0.0.2"]
        );
    }

    #[test]
    fn marker_at_line_start_is_not_a_host() {
        // The identifier must precede the marker; `find > 0` in the original
        assert!(discovered_hosts("host up\n").is_empty());
    }

    #[test]
    fn transforms_are_idempotent_on_processed_text() {
        let report = filter_report(RAW_TWO_HOSTS);
        assert_eq!(strip_latency(&report), report);
        assert_eq!(report.replace(REPORT_PREFIX, ""), report);
        assert_eq!(
            report.replace("\nHost is up", &format!(" {UP_MARKER}")),
            report
        );
    }
}
