// Validation errors for words entering or querying the trie

/// A single character that has no slot in the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported character {0:?}")]
pub struct UnsupportedCharacter(pub char);

/// Rejection of a whole word at the trie boundary.
///
/// Both variants are detected before any node is created or any ranking is
/// touched, so a rejected insert leaves the trie exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// The word has zero length.
    #[error("word is empty")]
    Empty,

    /// The word contains a character outside `a-z`, `A-Z`, `0-9`.
    /// `pos` is the character offset of the first offending character.
    #[error("unsupported character {ch:?} at position {pos}")]
    UnsupportedCharacter { ch: char, pos: usize },
}

impl WordError {
    /// Attach a position to a character-level failure.
    pub fn at(err: UnsupportedCharacter, pos: usize) -> Self {
        WordError::UnsupportedCharacter { ch: err.0, pos }
    }
}
