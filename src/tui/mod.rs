// Terminal interface
// The only module that knows about ratatui and crossterm

mod event;
mod input;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use log::warn;

use crate::app::{update, Action, App, Effect, ThemeMode};
use crate::audio::Player;
use crate::settings::AppSettings;
use crate::tui::event::{poll_event, TuiEvent};
use crate::tui::input::InputState;

/// Run the interactive converter until the user quits.
///
/// `app_dir` is where theme changes are persisted; with `None` they only
/// last for the session.
pub fn run(mut settings: AppSettings, app_dir: Option<PathBuf>) -> Result<()> {
    let mut app = App::new(ThemeMode::from_name(&settings.theme.mode));
    let mut input = InputState::new();
    let mut player = Player::with_best_sink();

    let mut terminal = ratatui::init();

    loop {
        terminal.draw(|f| ui::draw(f, &app, &input))?;

        let Some(tui_event) = poll_event(Duration::from_millis(100))? else {
            continue;
        };

        let action = match tui_event {
            TuiEvent::Quit => Some(Action::Quit),
            TuiEvent::Submit => Some(Action::Convert {
                input: input.text().to_string(),
            }),
            TuiEvent::ToggleDirection => Some(Action::ToggleDirection),
            TuiEvent::Play => Some(Action::Play),
            TuiEvent::Clear => {
                input.clear();
                Some(Action::Clear)
            }
            TuiEvent::CopyOutput => Some(Action::CopyOutput),
            TuiEvent::ToggleTheme => Some(Action::ToggleTheme),

            // Entry-line editing stays local to the TUI
            TuiEvent::InputChar(c) => {
                input.insert(c);
                None
            }
            TuiEvent::Backspace => {
                input.backspace();
                None
            }
            TuiEvent::Delete => {
                input.delete();
                None
            }
            TuiEvent::CursorLeft => {
                input.move_left();
                None
            }
            TuiEvent::CursorRight => {
                input.move_right();
                None
            }
            TuiEvent::CursorHome => {
                input.move_home();
                None
            }
            TuiEvent::CursorEnd => {
                input.move_end();
                None
            }
        };

        let Some(action) = action else {
            continue;
        };

        match update(&mut app, action) {
            Effect::None => {}
            Effect::Play(morse) => {
                if player.is_silent() {
                    // The factory's warning only reaches the log file
                    // in interactive mode
                    app.status_message = String::from("No audio backend, playing silently...");
                }
                // Show the status before playback blocks the loop
                terminal.draw(|f| ui::draw(f, &app, &input))?;
                match player.play(&morse) {
                    Ok(()) if player.is_silent() => {
                        app.status_message = String::from("No audio backend available.");
                    }
                    Ok(()) => app.status_message.clear(),
                    Err(e) => {
                        warn!("Playback failed: {}", e);
                        app.status_message = format!("Playback failed: {}", e);
                    }
                }
            }
            Effect::Copy(text) => {
                if let Err(e) = copy_to_clipboard(&text) {
                    warn!("Clipboard copy failed: {}", e);
                    app.status_message = format!("Copy failed: {}", e);
                }
            }
            Effect::ThemeChanged => {
                settings.theme.mode = app.theme.name().to_string();
                if let Some(dir) = &app_dir {
                    if let Err(e) = settings.save(dir) {
                        warn!("Failed to save settings: {}", e);
                    }
                }
            }
            Effect::Quit => break,
        }
    }

    ratatui::restore();
    Ok(())
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
