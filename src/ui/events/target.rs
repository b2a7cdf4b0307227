use super::*;

/// Target entry: any string is accepted and passed verbatim to the scan tool.
pub(super) fn handle_target_key(key: KeyEvent, state: &mut AppState, tx: &Sender<UiEvent>) -> bool {
    match key.code {
        KeyCode::Enter => {
            state.scan.target = state.target.input.clone();
            state.current_screen = Screen::Scan;
            scan::start_scan(state, tx);
        }
        KeyCode::Esc => return true,
        KeyCode::Char(c) => {
            let byte_idx = byte_index(&state.target.input, state.target.cursor);
            state.target.input.insert(byte_idx, c);
            state.target.cursor += 1;
        }
        KeyCode::Backspace => {
            if state.target.cursor > 0 {
                state.target.cursor -= 1;
                let byte_idx = byte_index(&state.target.input, state.target.cursor);
                state.target.input.remove(byte_idx);
            }
        }
        KeyCode::Delete => {
            let chars = state.target.input.chars().count();
            if state.target.cursor < chars {
                let byte_idx = byte_index(&state.target.input, state.target.cursor);
                state.target.input.remove(byte_idx);
            }
        }
        KeyCode::Left => {
            state.target.cursor = state.target.cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            let chars = state.target.input.chars().count();
            if state.target.cursor < chars {
                state.target.cursor += 1;
            }
        }
        KeyCode::Home => state.target.cursor = 0,
        KeyCode::End => state.target.cursor = state.target.input.chars().count(),
        _ => {}
    }

    false
}

fn byte_index(input: &str, char_idx: usize) -> usize {
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crossterm::event::KeyEvent;
    use std::path::PathBuf;

    fn app() -> (AppState, Receiver<UiEvent>, Sender<UiEvent>) {
        let (tx, rx) = mpsc::channel();
        let state = AppState::new(None, PathBuf::from("."), &Config::default());
        (state, rx, tx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn typing_edits_the_target_field() {
        let (mut state, _rx, tx) = app();
        for c in "10.0.0.0/24".chars() {
            handle_target_key(press(KeyCode::Char(c)), &mut state, &tx);
        }
        assert_eq!(state.target.input, "10.0.0.0/24");

        handle_target_key(press(KeyCode::Backspace), &mut state, &tx);
        assert_eq!(state.target.input, "10.0.0.0/2");
    }

    #[test]
    fn cursor_edits_in_the_middle() {
        let (mut state, _rx, tx) = app();
        for c in "ab".chars() {
            handle_target_key(press(KeyCode::Char(c)), &mut state, &tx);
        }
        handle_target_key(press(KeyCode::Left), &mut state, &tx);
        handle_target_key(press(KeyCode::Char('x')), &mut state, &tx);
        assert_eq!(state.target.input, "axb");
    }

    #[test]
    fn escape_quits_from_target_entry() {
        let (mut state, _rx, tx) = app();
        assert!(handle_target_key(press(KeyCode::Esc), &mut state, &tx));
    }
}
