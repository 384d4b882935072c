// Audio playback module
// Schedules Morse strings as tone sequences and emits them through a sink

pub mod player;
pub mod tone;

#[cfg(feature = "audio-cpal")]
pub mod output;

use thiserror::Error;

pub use player::{schedule, Element, Player, ToneSeq};

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device available")]
    NoDevice,
    #[error("unsupported sample format: {0}")]
    SampleFormat(String),
    #[error("audio stream error: {0}")]
    Stream(String),
}

/// Output backend for tone sequences.
///
/// Implementations block until the sequence has been emitted in full.
/// No `Send` bound: cpal streams stay on the thread that built them.
pub trait AudioSink {
    fn play_sequence(&mut self, seq: &ToneSeq) -> Result<(), AudioError>;

    /// True when playback produces no sound.
    fn is_silent(&self) -> bool {
        false
    }
}

/// Sink that produces no sound.
///
/// Sleeps through each element so playback takes the same wall time as
/// the audible version.
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play_sequence(&mut self, seq: &ToneSeq) -> Result<(), AudioError> {
        for element in seq {
            std::thread::sleep(element.duration());
        }
        Ok(())
    }

    fn is_silent(&self) -> bool {
        true
    }
}

/// Build the best sink available on this machine.
///
/// Falls back to [`SilentSink`], with a logged warning, when audio
/// support is compiled out or no device can be opened.
pub fn create_sink() -> Box<dyn AudioSink> {
    #[cfg(feature = "audio-cpal")]
    {
        match output::CpalOutput::new() {
            Ok(out) => return Box::new(out),
            Err(e) => log::warn!("Audio device unavailable, playing silently: {}", e),
        }
    }
    #[cfg(not(feature = "audio-cpal"))]
    log::warn!("No audio backend compiled in, playing silently");
    Box::new(SilentSink)
}
