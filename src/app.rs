// Core application state and the update reducer
// UI-agnostic: the terminal layer turns key events into Actions and
// performs the side effects update() asks for

use crate::morse;

/// Which way the next conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    TextToMorse,
    MorseToText,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::TextToMorse => "Text → Morse",
            Direction::MorseToText => "Morse → Text",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Direction::TextToMorse => Direction::MorseToText,
            Direction::MorseToText => Direction::TextToMorse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("dark") {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Everything that can happen in the converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Convert { input: String },
    ToggleDirection,
    Play,
    Clear,
    CopyOutput,
    ToggleTheme,
    Quit,
}

/// Side effect requested by `update`; the caller performs the I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Play(String),
    Copy(String),
    ThemeChanged,
    Quit,
}

pub struct App {
    pub direction: Direction,
    /// Latest conversion result, shown in the output pane.
    pub output: String,
    /// Most recent encoded sequence, kept for playback.
    pub morse: Option<String>,
    pub status_message: String,
    pub theme: ThemeMode,
}

impl App {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            direction: Direction::TextToMorse,
            output: String::new(),
            morse: None,
            status_message: String::new(),
            theme,
        }
    }
}

/// Apply an action to the state and report the side effect to run.
pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Convert { input } => {
            if input.is_empty() {
                app.status_message = match app.direction {
                    Direction::TextToMorse => String::from("Please enter text to convert!"),
                    Direction::MorseToText => String::from("Please enter Morse code to convert!"),
                };
                return Effect::None;
            }
            match app.direction {
                Direction::TextToMorse => {
                    let conversion = morse::encode(&input);
                    app.output = conversion.output.clone();
                    app.morse = Some(conversion.output);
                    app.status_message = if conversion.lossy {
                        String::from("Some characters were ignored (unsupported).")
                    } else {
                        String::new()
                    };
                }
                Direction::MorseToText => {
                    let conversion = morse::decode(&input);
                    app.output = conversion.output;
                    app.status_message = if conversion.lossy {
                        String::from("Some Morse sequences were ignored (unsupported).")
                    } else {
                        String::new()
                    };
                }
            }
            Effect::None
        }
        Action::ToggleDirection => {
            app.direction = app.direction.toggled();
            app.status_message = format!("Direction: {}", app.direction.label());
            Effect::None
        }
        Action::Play => match &app.morse {
            Some(morse) if !morse.is_empty() => {
                app.status_message = String::from("Playing...");
                Effect::Play(morse.clone())
            }
            _ => {
                app.status_message = String::from("Nothing to play yet.");
                Effect::None
            }
        },
        Action::Clear => {
            app.output.clear();
            app.morse = None;
            app.status_message.clear();
            Effect::None
        }
        Action::CopyOutput => {
            if app.output.is_empty() {
                return Effect::None;
            }
            app.status_message = String::from("Output copied to clipboard!");
            Effect::Copy(app.output.clone())
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggled();
            Effect::ThemeChanged
        }
        Action::Quit => Effect::Quit,
    }
}
