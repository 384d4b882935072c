use std::fs::File;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode, WriteLogger};

use morsesloth::audio::Player;
use morsesloth::morse;
use morsesloth::settings::{self, AppSettings};
use morsesloth::tui;

#[derive(Parser)]
#[command(name = "morsesloth", about = "Text to Morse code converter with audible playback")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to Morse code
    Encode {
        /// Text to convert
        text: String,
        /// Play the result after printing it
        #[arg(long)]
        play: bool,
    },
    /// Convert Morse code back to text
    Decode {
        /// Morse code to convert (letters separated by spaces, words by " / ")
        morse: String,
    },
    /// Play a Morse sequence without converting
    Play {
        /// Morse code to play
        morse: String,
    },
}

fn init_logging(interactive: bool) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if interactive {
        // The terminal belongs to the UI; log to a file instead
        if let Ok(log_file) = File::create("morsesloth.log") {
            let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
        }
    } else {
        let _ = TermLogger::init(
            LevelFilter::Warn,
            log_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.command.is_none());
    log::info!("Morsesloth starting up");

    match args.command {
        None => {
            let app_dir = settings::config_dir();
            let settings = match &app_dir {
                Some(dir) => AppSettings::load(dir).unwrap_or_else(|e| {
                    log::warn!("Failed to load settings: {}", e);
                    AppSettings::default()
                }),
                None => AppSettings::default(),
            };
            tui::run(settings, app_dir)
        }
        Some(Command::Encode { text, play }) => {
            if text.is_empty() {
                bail!("Please enter text to convert!");
            }
            let conversion = morse::encode(&text);
            println!("{}", conversion.output);
            if conversion.lossy {
                eprintln!("Some characters were ignored (unsupported).");
            }
            if play {
                Player::with_best_sink().play(&conversion.output)?;
            }
            Ok(())
        }
        Some(Command::Decode { morse: code }) => {
            if code.is_empty() {
                bail!("Please enter Morse code to convert!");
            }
            let conversion = morse::decode(&code);
            println!("{}", conversion.output);
            if conversion.lossy {
                eprintln!("Some Morse sequences were ignored (unsupported).");
            }
            Ok(())
        }
        Some(Command::Play { morse: code }) => {
            Player::with_best_sink().play(&code)?;
            Ok(())
        }
    }
}
