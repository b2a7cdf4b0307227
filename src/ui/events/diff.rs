use super::*;

pub(super) fn handle_diff_key(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        // Return to the scan screen
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.current_screen = Screen::Scan;
        }
        KeyCode::Up => state.diff.scroll = state.diff.scroll.saturating_sub(1),
        KeyCode::Down => state.diff.scroll = state.diff.scroll.saturating_add(1),
        KeyCode::PageUp => state.diff.scroll = state.diff.scroll.saturating_sub(10),
        KeyCode::PageDown => state.diff.scroll = state.diff.scroll.saturating_add(10),
        _ => {}
    }

    false
}
