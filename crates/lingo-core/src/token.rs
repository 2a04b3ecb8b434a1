// Corpus tokenizer: maximal runs of alphanumeric characters

use crate::character::is_token_char;

/// A token cut out of a line of corpus text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text. Always non-empty and made of ASCII alphanumerics.
    pub text: &'a str,

    /// Byte offset of the token within the source text.
    pub pos: usize,
}

impl Token<'_> {
    /// Byte offset one past the end of the token.
    pub fn end(&self) -> usize {
        self.pos + self.text.len()
    }
}

/// Iterator over the tokens of a text. Created by [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    offset: usize,
}

/// Split `text` into tokens.
///
/// Each maximal run of [`is_token_char`] characters is one token; every other
/// character is a separator. Case is preserved and there is no minimum or
/// maximum token length.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { text, offset: 0 }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.text[self.offset..];
        let start = self.offset + rest.find(is_token_char)?;
        let len = self.text[start..]
            .find(|c: char| !is_token_char(c))
            .unwrap_or(self.text.len() - start);
        self.offset = start + len;
        Some(Token {
            text: &self.text[start..start + len],
            pos: start,
        })
    }
}
