// Tone scheduling and the blocking player

use std::time::Duration;

use super::{AudioError, AudioSink};

/// Fixed pitch for every tone.
pub const TONE_HZ: f32 = 800.0;

/// Short beep.
pub const DOT: Duration = Duration::from_millis(100);
/// Long beep.
pub const DASH: Duration = Duration::from_millis(300);
/// Pause between letters.
pub const LETTER_GAP: Duration = Duration::from_millis(100);
/// Pause between words.
pub const WORD_GAP: Duration = Duration::from_millis(300);

/// One playback step: a tone or a rest, with its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Tone(Duration),
    Silence(Duration),
}

impl Element {
    pub fn duration(&self) -> Duration {
        match self {
            Element::Tone(d) | Element::Silence(d) => *d,
        }
    }
}

pub type ToneSeq = Vec<Element>;

/// Expand a Morse string into playback elements, left to right.
///
/// `.` and `-` become tones, the letter space and `/` become rests.
/// Elements follow each other with no implicit gap, so `".-"` is one
/// short tone immediately followed by one long tone. Any other
/// character is ignored.
pub fn schedule(morse: &str) -> ToneSeq {
    morse
        .chars()
        .filter_map(|symbol| match symbol {
            '.' => Some(Element::Tone(DOT)),
            '-' => Some(Element::Tone(DASH)),
            ' ' => Some(Element::Silence(LETTER_GAP)),
            '/' => Some(Element::Silence(WORD_GAP)),
            _ => None,
        })
        .collect()
}

/// Plays Morse strings through an output sink.
///
/// `play` blocks until the whole sequence has been emitted; there is no
/// pause or cancellation.
pub struct Player {
    sink: Box<dyn AudioSink>,
}

impl Player {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self { sink }
    }

    /// Player backed by the best sink available on this machine.
    pub fn with_best_sink() -> Self {
        Self::new(super::create_sink())
    }

    /// True when the underlying sink produces no sound.
    pub fn is_silent(&self) -> bool {
        self.sink.is_silent()
    }

    pub fn play(&mut self, morse: &str) -> Result<(), AudioError> {
        let seq = schedule(morse);
        if seq.is_empty() {
            return Ok(());
        }
        self.sink.play_sequence(&seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct CaptureSink {
        played: Rc<RefCell<Vec<ToneSeq>>>,
    }

    impl AudioSink for CaptureSink {
        fn play_sequence(&mut self, seq: &ToneSeq) -> Result<(), AudioError> {
            self.played.borrow_mut().push(seq.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl AudioSink for FailingSink {
        fn play_sequence(&mut self, _seq: &ToneSeq) -> Result<(), AudioError> {
            Err(AudioError::NoDevice)
        }
    }

    #[test]
    fn test_timing_constants() {
        assert_eq!(DOT, Duration::from_millis(100));
        assert_eq!(DASH, DOT * 3);
        assert_eq!(LETTER_GAP, DOT);
        assert_eq!(WORD_GAP, LETTER_GAP * 3);
    }

    #[test]
    fn test_schedule_maps_symbols() {
        assert_eq!(
            schedule(". - /"),
            vec![
                Element::Tone(DOT),
                Element::Silence(LETTER_GAP),
                Element::Tone(DASH),
                Element::Silence(LETTER_GAP),
                Element::Silence(WORD_GAP),
            ]
        );
    }

    #[test]
    fn test_schedule_dot_dash_back_to_back() {
        // no implicit gap between symbols of a letter
        assert_eq!(
            schedule(".-"),
            vec![Element::Tone(DOT), Element::Tone(DASH)]
        );
    }

    #[test]
    fn test_schedule_ignores_unknown_characters() {
        assert_eq!(schedule("a.b-c\n"), schedule(".-"));
        assert!(schedule("xyz").is_empty());
    }

    #[test]
    fn test_play_empty_never_touches_sink() {
        let sink = CaptureSink::default();
        let played = sink.played.clone();
        let mut player = Player::new(Box::new(sink));

        player.play("").unwrap();

        assert!(played.borrow().is_empty());
    }

    #[test]
    fn test_play_sends_schedule_to_sink() {
        let sink = CaptureSink::default();
        let played = sink.played.clone();
        let mut player = Player::new(Box::new(sink));

        player.play("... ---").unwrap();

        assert_eq!(played.borrow().as_slice(), &[schedule("... ---")]);
    }

    #[test]
    fn test_play_surfaces_sink_error() {
        let mut player = Player::new(Box::new(FailingSink));
        let result = player.play(".-");
        assert!(matches!(result, Err(AudioError::NoDevice)));
    }

    #[test]
    fn test_audible_sink_is_not_silent() {
        let player = Player::new(Box::new(CaptureSink::default()));
        assert!(!player.is_silent());
    }
}
