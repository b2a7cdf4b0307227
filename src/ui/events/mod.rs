// Event handling and main UI loop

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::engine::{self, ScanOutcome};
use crate::ui::state::{AppState, Screen};
use crate::ui::{DiffScreen, LiveScreen, ScanScreen, TargetScreen};

mod diff;
mod live;
mod scan;
mod target;

// Event types sent from worker threads to the main loop
pub(crate) enum UiEvent {
    Input(Event),
    Tick,
    ScanFinished { scan_id: u64, outcome: ScanOutcome },
    ScanFailed { scan_id: u64, error: String },
    LiveCycle { live_id: u64, blocks: Vec<String> },
}

/// Spawn a dedicated thread for terminal event polling.
fn spawn_event_thread(tx: Sender<UiEvent>) {
    let tick_rate = Duration::from_millis(100);

    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Run one scan on a worker thread.
///
/// The cancellation token is checked after the external command returns and
/// before anything is written; a cancelled scan leaves no file behind and
/// sends no result.
fn spawn_scan_thread(
    program: String,
    target: String,
    dir: PathBuf,
    scan_id: u64,
    cancel: Arc<AtomicBool>,
    tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let result = (|| -> anyhow::Result<Option<ScanOutcome>> {
            let (sequence, path) = engine::next_scan_path(&dir)?;
            let raw = engine::run_discovery(&program, &target)?;

            if cancel.load(Ordering::Relaxed) {
                return Ok(None);
            }

            let report = engine::filter_report(&raw);
            engine::write_scan(&path, &report)?;
            let hosts = engine::discovered_hosts(&report);

            Ok(Some(ScanOutcome {
                sequence,
                filename: engine::scan_filename(sequence),
                path,
                report,
                hosts,
            }))
        })();

        match result {
            Ok(Some(outcome)) => {
                let _ = tx.send(UiEvent::ScanFinished { scan_id, outcome });
            }
            Ok(None) => {} // Cancelled; the UI already reported the interrupt
            Err(e) => {
                if !cancel.load(Ordering::Relaxed) {
                    let _ = tx.send(UiEvent::ScanFailed {
                        scan_id,
                        error: format!("{e:#}"),
                    });
                }
            }
        }
    });
}

/// Run the live-monitor loop on a worker thread: one sequential pass over
/// the targets per cycle, then sleep, until the token is set.
fn spawn_live_thread(
    program: String,
    targets: Vec<String>,
    interval: Duration,
    live_id: u64,
    cancel: Arc<AtomicBool>,
    tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        loop {
            if cancel.load(Ordering::Relaxed) {
                return;
            }

            let blocks = engine::monitor_pass(&program, &targets);

            if cancel.load(Ordering::Relaxed) {
                return;
            }
            if tx.send(UiEvent::LiveCycle { live_id, blocks }).is_err() {
                return;
            }

            // Sleep in short slices so cancellation stays responsive
            let deadline = Instant::now() + interval;
            while Instant::now() < deadline {
                if cancel.load(Ordering::Relaxed) {
                    return;
                }
                thread::sleep(Duration::from_millis(50));
            }
        }
    });
}

pub fn run_ui(initial_target: Option<String>, scan_dir: PathBuf, config: &Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(initial_target, scan_dir, config);

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx.clone());

    let result = run_app(&mut terminal, &mut app_state, event_tx, event_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    tx: Sender<UiEvent>,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    loop {
        // Block for at least one event, then drain the queue so input is
        // never stuck behind a tick backlog
        let mut pending: Vec<UiEvent> = Vec::new();
        match event_rx.recv() {
            Ok(evt) => pending.push(evt),
            Err(_) => return Ok(()), // Channel closed
        }
        while let Ok(evt) = event_rx.try_recv() {
            pending.push(evt);
        }

        for evt in pending {
            match evt {
                UiEvent::Input(Event::Key(key)) => {
                    if handle_key(key, state, &tx) {
                        return Ok(());
                    }
                }
                UiEvent::Input(_) | UiEvent::Tick => {}
                UiEvent::ScanFinished { scan_id, outcome } => {
                    // Drops results from a cancelled or superseded scan
                    scan::apply_scan_result(state, scan_id, outcome);
                }
                UiEvent::ScanFailed { scan_id, error } => {
                    scan::apply_scan_failure(state, scan_id, error);
                }
                UiEvent::LiveCycle { live_id, blocks } => {
                    if live_id == state.live.live_id && state.live.running {
                        state.live.blocks = blocks;
                        state.live.cycles += 1;
                    }
                }
            }
        }

        terminal.draw(|frame| match state.current_screen {
            Screen::Target => TargetScreen::render(frame, &state.target),
            Screen::Scan => ScanScreen::render(frame, &mut state.scan),
            Screen::Diff => DiffScreen::render(frame, &state.diff),
            Screen::Live => LiveScreen::render(frame, &state.live),
        })?;
    }
}

fn handle_key(key: KeyEvent, state: &mut AppState, tx: &Sender<UiEvent>) -> bool {
    // Ctrl+C cancels whatever long-running operation owns the screen,
    // and quits when nothing is running
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if state.scan.in_progress {
            scan::cancel_running_scan(state);
            return false;
        }
        if state.live.running {
            live::stop_live_monitor(state);
            return false;
        }
        return true;
    }

    match state.current_screen {
        Screen::Target => target::handle_target_key(key, state, tx),
        Screen::Scan => scan::handle_scan_key(key, state, tx),
        Screen::Diff => diff::handle_diff_key(key, state),
        Screen::Live => live::handle_live_key(key, state),
    }
}
