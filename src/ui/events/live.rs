use super::*;

pub(super) fn handle_live_key(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        // The only way out of the loop is an explicit stop
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            stop_live_monitor(state);
        }
        KeyCode::Up => state.live.scroll = state.live.scroll.saturating_sub(1),
        KeyCode::Down => state.live.scroll = state.live.scroll.saturating_add(1),
        _ => {}
    }

    false
}

/// Stop the monitor loop and return to the scan screen. The worker thread
/// sees the token between cycles and exits on its own.
pub(super) fn stop_live_monitor(state: &mut AppState) {
    if let Some(token) = state.live.cancel.take() {
        token.store(true, Ordering::Relaxed);
    }
    state.live.running = false;
    state.live.status = "Live monitoring stopped".to_string();
    state.current_screen = Screen::Scan;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::path::PathBuf;

    #[test]
    fn stop_sets_token_and_returns_to_scan_screen() {
        let mut state = AppState::new(None, PathBuf::from("."), &Config::default());
        state.current_screen = Screen::Live;
        state.live.running = true;
        let token = Arc::new(AtomicBool::new(false));
        state.live.cancel = Some(token.clone());

        stop_live_monitor(&mut state);

        assert!(token.load(Ordering::Relaxed));
        assert!(!state.live.running);
        assert_eq!(state.current_screen, Screen::Scan);
        assert!(state.live.status.contains("stopped"));
    }
}
