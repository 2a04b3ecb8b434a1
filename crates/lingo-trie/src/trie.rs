// Prefix trie: corpus insertion and ranked suggestion search

use std::sync::Arc;

use lingo_core::{CharSlot, WordError, encode_word};
use log::trace;

use crate::TrieError;
use crate::node::{NodeId, TrieNode};
use crate::ranking::{Candidate, RankingSet};

/// Result of [`Trie::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query is a word of the corpus; there is nothing to suggest.
    Known,
    /// Ranked alternatives sharing the longest available prefix with the
    /// query. May be empty.
    Suggestions(RankingSet),
}

impl SearchOutcome {
    pub fn is_known(&self) -> bool {
        matches!(self, SearchOutcome::Known)
    }

    /// The suggestion ranking, or `None` for a known word.
    pub fn into_ranking(self) -> Option<RankingSet> {
        match self {
            SearchOutcome::Known => None,
            SearchOutcome::Suggestions(ranking) => Some(ranking),
        }
    }
}

/// 62-ary prefix trie over the alphanumeric alphabet.
///
/// Nodes live in a flat arena with the root at index 0. Each node keeps the
/// best three words reachable through it, so a search never has to walk a
/// subtree: it reads the ranking where the query diverges and backfills from
/// the rankings of the nodes it passed on the way down.
///
/// The trie only grows. After the build phase it can be shared between
/// threads and searched concurrently, since `search` allocates its result
/// and never writes to a node.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    word_count: usize,
    token_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            word_count: 0,
            token_count: 0,
        }
    }

    // =========================================================================
    // Build phase
    // =========================================================================

    /// Record one occurrence of `word`.
    ///
    /// Creates the missing nodes of the word's path, then offers the word to
    /// the ranking of every node on that path, tagged with the character it
    /// takes one step past the node. Returns the word's new frequency.
    ///
    /// The word is validated in full before anything is modified, so a
    /// rejected word leaves the trie untouched.
    pub fn insert(&mut self, word: &str) -> Result<u32, TrieError> {
        let slots = encode_word(word)?;
        if self.nodes.len() + slots.len() > NodeId::MAX_NODES {
            return Err(TrieError::CapacityExhausted(self.nodes.len()));
        }

        let mut path = Vec::with_capacity(slots.len());
        let mut current = NodeId::ROOT;
        for &slot in &slots {
            current = match self.nodes[current.index()].child(slot) {
                Some(child) => child,
                None => self.push_child(current, slot),
            };
            path.push(current);
        }

        let terminal = &mut self.nodes[current.index()];
        let frequency = terminal.frequency.saturating_add(1);
        let first_occurrence = terminal.word.is_none();
        let shared = Arc::clone(terminal.word.get_or_insert_with(|| Arc::from(word)));
        if first_occurrence {
            self.word_count += 1;
        }

        for (i, id) in path.iter().enumerate() {
            let candidate = Candidate::on_path(Arc::clone(&shared), frequency, i + 1);
            self.nodes[id.index()].ranking.insert(candidate);
        }

        self.nodes[current.index()].frequency = frequency;
        self.token_count += 1;
        Ok(frequency)
    }

    fn push_child(&mut self, parent: NodeId, slot: CharSlot) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(TrieNode::default());
        self.nodes[parent.index()].set_child(slot, id);
        id
    }

    // =========================================================================
    // Query phase
    // =========================================================================

    /// Find alternatives for `word`.
    ///
    /// Walks down the query's path. If the path breaks off, the ranking of
    /// the last node reached is re-anchored at the matched depth. If the
    /// whole query is consumed, a word ending there yields
    /// [`SearchOutcome::Known`]; otherwise that node's ranking is used as is.
    /// Open slots are then backfilled from the non-empty rankings passed on
    /// the way down, deepest first, until three candidates are collected.
    pub fn search(&self, word: &str) -> Result<SearchOutcome, WordError> {
        let slots = encode_word(word)?;
        let last = slots.len() - 1;

        let mut node = self.root();
        let mut contributing: Vec<&TrieNode> = Vec::new();
        let mut ranking = RankingSet::new();

        for (depth, &slot) in slots.iter().enumerate() {
            let Some(child_id) = node.child(slot) else {
                trace!("search {word:?}: path ends after {depth} characters");
                ranking = RankingSet::rebuild_at_depth(node.ranking(), depth);
                break;
            };
            let child = self.node(child_id);
            if depth == last {
                if child.is_end_of_word() {
                    return Ok(SearchOutcome::Known);
                }
                ranking = child.ranking().clone();
                break;
            }
            node = child;
            if !node.ranking().is_empty() {
                contributing.push(node);
            }
        }

        for ancestor in contributing.iter().rev() {
            if ranking.merge_from(ancestor.ranking()) {
                break;
            }
        }
        Ok(SearchOutcome::Suggestions(ranking))
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn root(&self) -> &TrieNode {
        &self.nodes[NodeId::ROOT.index()]
    }

    pub fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.index()]
    }

    /// The node reached by spelling `prefix` from the root, if any.
    pub fn node_at(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = self.root();
        for c in prefix.chars() {
            let slot = CharSlot::try_from(c).ok()?;
            node = self.node(node.child(slot)?);
        }
        Some(node)
    }

    /// Number of times `word` was inserted, or `None` if it never was.
    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.node_at(word)
            .filter(|node| node.is_end_of_word())
            .map(TrieNode::frequency)
    }

    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.frequency(word).is_some()
    }

    /// Number of distinct words inserted.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Total number of successful inserts.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
