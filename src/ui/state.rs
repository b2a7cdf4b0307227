// Application state management

use crate::config::Config;
use crate::engine::ScanOutcome;
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Target,
    Scan,
    Diff,
    Live,
}

pub struct AppState {
    pub current_screen: Screen,
    pub scan_dir: PathBuf,
    pub nmap_program: String,
    pub diff_program: String,
    pub live_interval: Duration,
    pub target: TargetState,
    pub scan: ScanState,
    pub diff: DiffState,
    pub live: LiveState,
}

impl AppState {
    pub fn new(initial_target: Option<String>, scan_dir: PathBuf, config: &Config) -> Self {
        Self {
            current_screen: Screen::Target,
            scan_dir,
            nmap_program: config.programs.nmap.clone(),
            diff_program: config.programs.diff.clone(),
            live_interval: Duration::from_secs(config.live.interval_secs),
            target: TargetState::new(initial_target.unwrap_or_default()),
            scan: ScanState::default(),
            diff: DiffState::default(),
            live: LiveState::default(),
        }
    }
}

/// Target-entry screen: a single editable text field.
pub struct TargetState {
    pub input: String,
    pub cursor: usize,
}

impl TargetState {
    pub fn new(input: String) -> Self {
        let cursor = input.chars().count();
        Self { input, cursor }
    }
}

/// Scan screen: the current scan's results and the host multi-select list.
pub struct ScanState {
    pub target: String,
    pub status: String,
    pub filename: Option<String>,
    pub path: Option<PathBuf>,
    pub report: String,
    pub hosts: Vec<String>,
    /// Multi-select flags, parallel to `hosts`
    pub selected: Vec<bool>,
    pub list_state: ListState,
    pub in_progress: bool,
    /// Token for the running scan, set to abandon it
    pub cancel: Option<Arc<AtomicBool>>,
    /// Monotonic id so a stale worker result can be told from the current one
    pub scan_id: u64,
}

impl Default for ScanState {
    fn default() -> Self {
        Self {
            target: String::new(),
            status: String::new(),
            filename: None,
            path: None,
            report: String::new(),
            hosts: Vec::new(),
            selected: Vec::new(),
            list_state: ListState::default(),
            in_progress: false,
            cancel: None,
            scan_id: 0,
        }
    }
}

impl ScanState {
    /// Replace results wholesale from a completed scan.
    pub fn apply_outcome(&mut self, outcome: ScanOutcome) {
        self.status = format!("Scan complete and saved to {}", outcome.filename);
        self.filename = Some(outcome.filename);
        self.path = Some(outcome.path);
        self.report = outcome.report;
        self.selected = vec![false; outcome.hosts.len()];
        self.hosts = outcome.hosts;
        self.list_state = ListState::default();
        if !self.hosts.is_empty() {
            self.list_state.select(Some(0));
        }
        self.in_progress = false;
        self.cancel = None;
    }

    pub fn toggle_selected(&mut self) {
        if let Some(idx) = self.list_state.selected() {
            if let Some(flag) = self.selected.get_mut(idx) {
                *flag = !*flag;
            }
        }
    }

    /// Map the selection flags back into host identifiers, in list order.
    pub fn selected_hosts(&self) -> Vec<String> {
        self.hosts
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(host, _)| host.clone())
            .collect()
    }
}

/// Diff screen: raw output of the external diff tool.
#[derive(Default)]
pub struct DiffState {
    pub title: String,
    pub output: String,
    pub scroll: u16,
}

/// Live-monitor screen: one result block per monitored target.
pub struct LiveState {
    pub targets: Vec<String>,
    pub blocks: Vec<String>,
    pub status: String,
    pub cycles: u64,
    pub running: bool,
    pub cancel: Option<Arc<AtomicBool>>,
    pub live_id: u64,
    pub scroll: u16,
}

impl Default for LiveState {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            blocks: Vec::new(),
            status: String::new(),
            cycles: 0,
            running: false,
            cancel: None,
            live_id: 0,
            scroll: 0,
        }
    }
}
