//! Suggestion engine for short chat tokens.
//!
//! Learns word frequencies from a corpus and, for a query it has never seen,
//! proposes up to three corpus words sharing the longest possible prefix
//! with it.
//!
//! # Architecture
//!
//! - [`ranking`] -- bounded best-first candidate list kept at every node
//! - [`node`] -- arena node with 62 child slots
//! - [`trie`] -- insertion and the search/backfill algorithm
//! - [`checker`] -- corpus loading and the word-list query API

pub mod checker;
pub mod node;
pub mod ranking;
pub mod trie;

pub use checker::{LoadError, LoadStats, SpellChecker, Suggestion};
pub use ranking::{Anchor, Candidate, RANKING_CAPACITY, RankingSet};
pub use trie::{SearchOutcome, Trie};

use lingo_core::WordError;

/// Error type for trie insertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("trie cannot grow past {0} nodes")]
    CapacityExhausted(usize),
}
