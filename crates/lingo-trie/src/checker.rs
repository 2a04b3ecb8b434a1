// SpellChecker: corpus loading and suggestion lookup on top of the trie
//
// Loading is the only phase that needs `&mut self`; once a checker is built
// it answers queries through `&self` and can be shared across threads.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use lingo_core::{WordError, tokens};
use log::debug;

use crate::TrieError;
use crate::ranking::Anchor;
use crate::trie::{SearchOutcome, Trie};

/// Error type for corpus loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read corpus: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    Insert { line: usize, source: TrieError },
}

/// Counters reported by [`SpellChecker::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read.
    pub lines: usize,
    /// Tokens inserted.
    pub tokens: usize,
}

/// A ranked suggestion with the data it was ranked by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub frequency: u32,
    /// Length of the prefix shared with the query when the query left the
    /// trie; `None` for candidates taken from a node on the query's path.
    pub shared_prefix: Option<usize>,
}

/// Frequency-ranked "did you mean" lookup over a tokenized corpus.
#[derive(Debug, Clone, Default)]
pub struct SpellChecker {
    trie: Trie,
}

impl SpellChecker {
    /// Create a checker with an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a checker from an in-memory corpus.
    pub fn from_text(text: &str) -> Result<Self, LoadError> {
        Self::from_reader(text.as_bytes())
    }

    /// Build a checker from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut checker = Self::new();
        checker.load(reader)?;
        Ok(checker)
    }

    /// Build a checker from a corpus file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut checker = Self::new();
        let stats = checker.load(BufReader::new(file))?;
        debug!(
            "loaded {}: {} lines, {} tokens, {} distinct words",
            path.display(),
            stats.lines,
            stats.tokens,
            checker.trie.word_count()
        );
        Ok(checker)
    }

    // =========================================================================
    // Build phase
    // =========================================================================

    /// Tokenize every line of `reader` and insert the tokens in order.
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<LoadStats, LoadError> {
        let mut stats = LoadStats::default();
        for line in reader.lines() {
            let line = line?;
            stats.lines += 1;
            stats.tokens += self
                .load_line(&line)
                .map_err(|source| LoadError::Insert {
                    line: stats.lines,
                    source,
                })?;
        }
        Ok(stats)
    }

    /// Insert the tokens of one line. Returns the number of tokens.
    pub fn load_line(&mut self, line: &str) -> Result<usize, TrieError> {
        let mut count = 0;
        for token in tokens(line) {
            self.trie.insert(token.text)?;
            count += 1;
        }
        Ok(count)
    }

    // =========================================================================
    // Query phase
    // =========================================================================

    /// Up to three corpus words to offer instead of `query`, best first.
    ///
    /// Empty when `query` is itself a corpus word or nothing shares a prefix
    /// with it.
    pub fn check(&self, query: &str) -> Result<Vec<String>, WordError> {
        Ok(self
            .suggest(query)?
            .into_iter()
            .map(|s| s.word)
            .collect())
    }

    /// Like [`check`](Self::check), keeping frequency and anchor details.
    pub fn suggest(&self, query: &str) -> Result<Vec<Suggestion>, WordError> {
        let ranking = match self.trie.search(query)? {
            SearchOutcome::Known => return Ok(Vec::new()),
            SearchOutcome::Suggestions(ranking) => ranking,
        };
        Ok(ranking
            .iter()
            .map(|c| Suggestion {
                word: c.word.to_string(),
                frequency: c.frequency,
                shared_prefix: match c.anchor {
                    Anchor::OnPath => None,
                    Anchor::SharedPrefix(depth) => Some(depth),
                },
            })
            .collect())
    }

    /// Returns `true` if `query` occurred in the corpus.
    pub fn is_known(&self, query: &str) -> bool {
        self.trie.contains(query)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }
}
