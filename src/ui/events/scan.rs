use super::*;

pub(super) fn handle_scan_key(key: KeyEvent, state: &mut AppState, tx: &Sender<UiEvent>) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Esc => {
            if state.scan.in_progress {
                cancel_running_scan(state);
            } else {
                state.current_screen = Screen::Target;
            }
        }
        KeyCode::Char('s') | KeyCode::Char('S') => start_scan(state, tx),
        KeyCode::Char('d') | KeyCode::Char('D') => request_diff(state),
        KeyCode::Char('l') | KeyCode::Char('L') => start_live_monitor(state, tx),
        KeyCode::Char(' ') => state.scan.toggle_selected(),
        KeyCode::Up => select_previous(state),
        KeyCode::Down => select_next(state),
        _ => {}
    }

    false
}

/// Kick off a scan against the current target on a worker thread.
pub(super) fn start_scan(state: &mut AppState, tx: &Sender<UiEvent>) {
    if state.scan.in_progress {
        return;
    }

    state.scan.scan_id += 1;
    let cancel = Arc::new(AtomicBool::new(false));
    state.scan.cancel = Some(cancel.clone());
    state.scan.in_progress = true;
    state.scan.status = format!("Scanning {}... Esc to stop", state.scan.target);

    spawn_scan_thread(
        state.nmap_program.clone(),
        state.scan.target.clone(),
        state.scan_dir.clone(),
        state.scan.scan_id,
        cancel,
        tx.clone(),
    );
}

/// Abandon the running scan: the worker's result is discarded, no file is
/// written, and the host list keeps its prior value.
pub(super) fn cancel_running_scan(state: &mut AppState) {
    if !state.scan.in_progress {
        return;
    }

    if let Some(token) = state.scan.cancel.take() {
        token.store(true, Ordering::Relaxed);
    }
    state.scan.in_progress = false;
    state.scan.status = "Scan interrupted".to_string();
}

/// Apply a completed scan, unless it was cancelled or superseded meanwhile.
pub(super) fn apply_scan_result(state: &mut AppState, scan_id: u64, outcome: ScanOutcome) {
    if scan_id == state.scan.scan_id && state.scan.in_progress {
        state.scan.apply_outcome(outcome);
    }
}

pub(super) fn apply_scan_failure(state: &mut AppState, scan_id: u64, error: String) {
    if scan_id == state.scan.scan_id && state.scan.in_progress {
        state.scan.in_progress = false;
        state.scan.cancel = None;
        state.scan.status = format!("Scan failed: {error}");
    }
}

/// Diff the current scan file against its assumed predecessor and show the
/// tool's raw output, error text included.
pub(super) fn request_diff(state: &mut AppState) {
    let Some(current) = state.scan.path.clone() else {
        state.scan.status = "No scan to diff yet".to_string();
        return;
    };
    let Some(previous) = engine::previous_scan_path(&current) else {
        return;
    };

    state.diff.title = format!(
        "{} {} {}",
        state.diff_program,
        previous.display(),
        current.display()
    );
    state.diff.output = match engine::diff_scans(&state.diff_program, &previous, &current) {
        Ok(output) => output,
        Err(e) => format!("{e:#}"),
    };
    state.diff.scroll = 0;
    state.current_screen = Screen::Diff;
}

/// Hand the selected host subset to the live monitor and start its loop.
pub(super) fn start_live_monitor(state: &mut AppState, tx: &Sender<UiEvent>) {
    if state.live.running {
        return;
    }

    state.live.live_id += 1;
    state.live.targets = state.scan.selected_hosts();
    state.live.blocks = Vec::new();
    state.live.cycles = 0;
    state.live.scroll = 0;
    state.live.status = "Live Monitor - Esc to stop".to_string();
    state.live.running = true;

    let cancel = Arc::new(AtomicBool::new(false));
    state.live.cancel = Some(cancel.clone());

    spawn_live_thread(
        state.nmap_program.clone(),
        state.live.targets.clone(),
        state.live_interval,
        state.live.live_id,
        cancel,
        tx.clone(),
    );

    state.current_screen = Screen::Live;
}

fn select_previous(state: &mut AppState) {
    if state.scan.hosts.is_empty() {
        return;
    }
    let selected = state.scan.list_state.selected().unwrap_or(0);
    state.scan.list_state.select(Some(selected.saturating_sub(1)));
}

fn select_next(state: &mut AppState) {
    if state.scan.hosts.is_empty() {
        return;
    }
    let last = state.scan.hosts.len() - 1;
    let selected = state.scan.list_state.selected().unwrap_or(0);
    state.scan.list_state.select(Some((selected + 1).min(last)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;

    fn app_with_hosts(hosts: &[&str]) -> AppState {
        let mut state = AppState::new(None, PathBuf::from("."), &Config::default());
        state.scan.hosts = hosts.iter().map(|h| h.to_string()).collect();
        state.scan.selected = vec![false; hosts.len()];
        state
    }

    fn outcome(hosts: &[&str]) -> ScanOutcome {
        ScanOutcome {
            sequence: 2,
            filename: "scan_2.txt".to_string(),
            path: PathBuf::from("scan_2.txt"),
            report: String::new(),
            hosts: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }

    #[test]
    fn cancel_keeps_prior_hosts_and_reports_interrupt() {
        let mut state = app_with_hosts(&["10.0.0.1", "10.0.0.2"]);
        state.scan.scan_id = 1;
        state.scan.in_progress = true;
        let token = Arc::new(AtomicBool::new(false));
        state.scan.cancel = Some(token.clone());

        cancel_running_scan(&mut state);

        assert!(token.load(Ordering::Relaxed));
        assert!(!state.scan.in_progress);
        assert!(state.scan.status.contains("interrupted"));
        assert_eq!(state.scan.hosts, vec!["10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn late_result_after_cancel_is_discarded() {
        let mut state = app_with_hosts(&["10.0.0.1"]);
        state.scan.scan_id = 1;
        state.scan.in_progress = true;
        state.scan.cancel = Some(Arc::new(AtomicBool::new(false)));

        cancel_running_scan(&mut state);
        apply_scan_result(&mut state, 1, outcome(&["192.0.2.9"]));

        assert_eq!(state.scan.hosts, vec!["10.0.0.1"]);
        assert!(state.scan.status.contains("interrupted"));
    }

    #[test]
    fn stale_result_from_superseded_scan_is_discarded() {
        let mut state = app_with_hosts(&[]);
        state.scan.scan_id = 2;
        state.scan.in_progress = true;

        apply_scan_result(&mut state, 1, outcome(&["192.0.2.9"]));
        assert!(state.scan.hosts.is_empty());

        apply_scan_result(&mut state, 2, outcome(&["192.0.2.9"]));
        assert_eq!(state.scan.hosts, vec!["192.0.2.9"]);
    }

    #[test]
    fn failure_updates_status_only_for_current_scan() {
        let mut state = app_with_hosts(&["10.0.0.1"]);
        state.scan.scan_id = 3;
        state.scan.in_progress = true;

        apply_scan_failure(&mut state, 3, "nmap not found".to_string());

        assert!(!state.scan.in_progress);
        assert!(state.scan.status.contains("nmap not found"));
        assert_eq!(state.scan.hosts, vec!["10.0.0.1"]);
    }

    #[test]
    fn list_navigation_stays_in_bounds() {
        let mut state = app_with_hosts(&["a", "b"]);
        state.scan.list_state.select(Some(0));

        select_previous(&mut state);
        assert_eq!(state.scan.list_state.selected(), Some(0));

        select_next(&mut state);
        select_next(&mut state);
        assert_eq!(state.scan.list_state.selected(), Some(1));
    }
}
