// Alphabet of the suggestion trie: character <-> child slot mapping

use crate::error::{UnsupportedCharacter, WordError};

/// Number of child slots per trie node: 26 lowercase + 26 uppercase + 10 digits.
pub const ALPHABET_SIZE: usize = 62;

const UPPER_OFFSET: u8 = 26;
const DIGIT_OFFSET: u8 = 52;

// ---------------------------------------------------------------------------
// Character classification
// ---------------------------------------------------------------------------

/// Returns `true` if `c` may appear inside a token.
///
/// Only ASCII letters and digits qualify. Everything else, including
/// non-ASCII letters, separates tokens.
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

// ---------------------------------------------------------------------------
// Slot mapping
// ---------------------------------------------------------------------------

/// Position of a character among the children of a trie node.
///
/// Mapping:
/// - `'a'..='z'` -> `0..=25`
/// - `'A'..='Z'` -> `26..=51`
/// - `'0'..='9'` -> `52..=61`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharSlot(u8);

impl CharSlot {
    /// The slot number, always below [`ALPHABET_SIZE`].
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The character this slot stands for.
    pub fn to_char(self) -> char {
        let byte = match self.0 {
            n if n < UPPER_OFFSET => b'a' + n,
            n if n < DIGIT_OFFSET => b'A' + (n - UPPER_OFFSET),
            n => b'0' + (n - DIGIT_OFFSET),
        };
        byte as char
    }

    /// Slot for a given index, or `None` if the index is out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < ALPHABET_SIZE).then(|| CharSlot(index as u8))
    }
}

impl TryFrom<char> for CharSlot {
    type Error = UnsupportedCharacter;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='z' => Ok(CharSlot(c as u8 - b'a')),
            'A'..='Z' => Ok(CharSlot(c as u8 - b'A' + UPPER_OFFSET)),
            '0'..='9' => Ok(CharSlot(c as u8 - b'0' + DIGIT_OFFSET)),
            _ => Err(UnsupportedCharacter(c)),
        }
    }
}

/// Validate a word and translate it into its slot sequence.
///
/// Fails on the empty word and on the first character outside the alphabet.
pub fn encode_word(word: &str) -> Result<Vec<CharSlot>, WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    word.chars()
        .enumerate()
        .map(|(pos, c)| CharSlot::try_from(c).map_err(|e| WordError::at(e, pos)))
        .collect()
}
