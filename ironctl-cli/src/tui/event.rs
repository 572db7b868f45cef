//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Quit,
}

/// Handle a key event. The dashboard is read-only, so only quit keys matter.
pub fn handle_key(key: KeyEvent) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => HandleResult::Quit,
            _ => HandleResult::Continue,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => HandleResult::Quit,
        _ => HandleResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_keys() {
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            HandleResult::Quit
        );
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            HandleResult::Quit
        );
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            HandleResult::Quit
        );
    }

    #[test]
    fn other_keys_ignored() {
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            HandleResult::Continue
        );
        assert_eq!(
            handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)),
            HandleResult::Continue
        );
    }
}
