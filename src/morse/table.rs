// Fixed character/Morse symbol tables

use std::collections::HashMap;
use std::sync::OnceLock;

/// Every supported character paired with its Morse code.
///
/// Space maps to the word-separator literal `/`, which is how word
/// boundaries survive a round trip through `encode` and `decode`.
/// The codes are unique, so the reverse table is exact.
const SYMBOLS: [(char, &str); 49] = [
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', "/"),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('!', "-.-.--"),
    (':', "---..."),
    ('\'', ".----."),
    ('-', "-....-"),
    ('/', "-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    (';', "-.-.-."),
];

/// Get the character → code table (built once, immutable after)
fn symbol_table() -> &'static HashMap<char, &'static str> {
    static TABLE: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| SYMBOLS.iter().copied().collect())
}

/// Get the code → character table, derived by inverting the forward table
fn reverse_table() -> &'static HashMap<&'static str, char> {
    static TABLE: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    TABLE.get_or_init(|| SYMBOLS.iter().map(|&(ch, code)| (code, ch)).collect())
}

/// Look up the Morse code for a (already uppercased) character
pub fn code_for(ch: char) -> Option<&'static str> {
    symbol_table().get(&ch).copied()
}

/// Look up the character for a Morse letter token
pub fn char_for(code: &str) -> Option<char> {
    reverse_table().get(code).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_full_alphabet() {
        // A-Z, 0-9, space, 12 punctuation marks
        assert_eq!(SYMBOLS.len(), 49);
        for ch in 'A'..='Z' {
            assert!(code_for(ch).is_some(), "missing letter {}", ch);
        }
        for ch in '0'..='9' {
            assert!(code_for(ch).is_some(), "missing digit {}", ch);
        }
        for ch in ".,?!:'-/()&;".chars() {
            assert!(code_for(ch).is_some(), "missing punctuation {}", ch);
        }
    }

    #[test]
    fn test_table_is_injective() {
        // Inverting may only collapse entries if two codes collide
        assert_eq!(reverse_table().len(), symbol_table().len());
    }

    #[test]
    fn test_space_maps_to_word_separator() {
        assert_eq!(code_for(' '), Some("/"));
        assert_eq!(char_for("/"), Some(' '));
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(code_for('A'), Some(".-"));
        assert_eq!(code_for('E'), Some("."));
        assert_eq!(code_for('0'), Some("-----"));
        assert_eq!(code_for('&'), Some(".-..."));
        assert_eq!(char_for("-.-.--"), Some('!'));
    }

    #[test]
    fn test_lowercase_is_not_in_the_table() {
        // Callers uppercase before lookup
        assert_eq!(code_for('a'), None);
    }
}
