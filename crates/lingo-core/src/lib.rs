//! Shared types for the lingo suggestion engine.
//!
//! - [`character`] -- the 62-symbol alphabet and its slot mapping
//! - [`token`] -- splitting raw corpus text into alphanumeric tokens
//! - [`error`] -- validation errors for words entering the trie

pub mod character;
pub mod error;
pub mod token;

pub use character::{ALPHABET_SIZE, CharSlot, encode_word, is_token_char};
pub use error::{UnsupportedCharacter, WordError};
pub use token::{Token, Tokens, tokens};
