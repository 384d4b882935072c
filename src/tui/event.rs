use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (translated into app::Action)
    Quit,
    Submit,
    ToggleDirection,
    Play,
    Clear,
    CopyOutput,
    ToggleTheme,

    // Entry-line editing (handled directly in the TUI)
    InputChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key_event) => {
            // Windows terminals also report key releases
            if key_event.kind != KeyEventKind::Press {
                return Ok(None);
            }
            let event = match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (KeyModifiers::CONTROL, KeyCode::Char('p')) => Some(TuiEvent::Play),
                (KeyModifiers::CONTROL, KeyCode::Char('l')) => Some(TuiEvent::Clear),
                (KeyModifiers::CONTROL, KeyCode::Char('y')) => Some(TuiEvent::CopyOutput),
                (KeyModifiers::CONTROL, KeyCode::Char('t')) => Some(TuiEvent::ToggleTheme),
                (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Enter) => Some(TuiEvent::Submit),
                (_, KeyCode::Tab) => Some(TuiEvent::ToggleDirection),
                (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
                (_, KeyCode::Delete) => Some(TuiEvent::Delete),
                (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
                (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
                (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
                (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
                (mods, KeyCode::Char(c)) if !mods.contains(KeyModifiers::CONTROL) => {
                    Some(TuiEvent::InputChar(c))
                }
                _ => None,
            };
            Ok(event)
        }
        _ => Ok(None),
    }
}
