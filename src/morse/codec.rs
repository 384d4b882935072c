// Bidirectional text/Morse conversion

use super::table;

/// Result of a conversion in either direction.
///
/// `lossy` is set when the input contained symbols outside the fixed
/// table; those symbols contribute nothing to `output`. Conversion never
/// fails outright - the output is always the best-effort translation of
/// the supported part of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub output: String,
    pub lossy: bool,
}

/// Convert text to Morse code.
///
/// Input is uppercased first. Each supported character becomes its code
/// followed by a single space; unsupported characters are skipped and set
/// `lossy`. Word boundaries come out as `/` because space itself is a
/// table entry.
///
/// Rejecting empty input is the caller's job; the codec just returns an
/// empty, non-lossy result for it.
pub fn encode(text: &str) -> Conversion {
    let mut morse = String::new();
    let mut lossy = false;

    for ch in text.to_uppercase().chars() {
        match table::code_for(ch) {
            Some(code) => {
                morse.push_str(code);
                morse.push(' ');
            }
            None => lossy = true,
        }
    }

    Conversion {
        output: morse.trim().to_string(),
        lossy,
    }
}

/// Convert Morse code back to text.
///
/// Words are delimited by the exact three-character token `" / "` (a
/// slash with a single space on each side); letters within a word are
/// whitespace-separated tokens. Tokens with no table entry are skipped
/// and set `lossy`.
///
/// Decoding is format-sensitive: a `/` that is not surrounded by exactly
/// one space per side is not treated as a word boundary and will
/// mis-tokenize. Only the spacing convention produced by [`encode`] is
/// guaranteed to round-trip.
pub fn decode(morse: &str) -> Conversion {
    let mut text = String::new();
    let mut lossy = false;

    for word in morse.split(" / ") {
        for letter in word.split_whitespace() {
            match table::char_for(letter) {
                Some(ch) => text.push(ch),
                None => lossy = true,
            }
        }
        text.push(' ');
    }

    Conversion {
        output: text.trim().to_string(),
        lossy,
    }
}
