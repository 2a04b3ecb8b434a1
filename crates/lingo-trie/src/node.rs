// Trie node arena entry

use std::sync::Arc;

use lingo_core::{ALPHABET_SIZE, CharSlot};

use crate::ranking::RankingSet;

/// Index of a node in the trie's arena.
///
/// Arena indices are `u32`; the trie refuses inserts that would need more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node is always the first arena entry.
    pub const ROOT: NodeId = NodeId(0);

    /// Largest number of nodes an arena can hold.
    pub const MAX_NODES: usize = u32::MAX as usize;

    pub(crate) fn from_index(index: usize) -> NodeId {
        debug_assert!(index < Self::MAX_NODES);
        NodeId(index as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A trie vertex: one child per alphabet slot, the node's ranking set, and
/// the word ending here (if any) with its occurrence count.
#[derive(Debug, Clone)]
pub struct TrieNode {
    children: [Option<NodeId>; ALPHABET_SIZE],
    pub(crate) ranking: RankingSet,
    /// Shared copy of the word ending at this node. Reused by every
    /// ranking entry for the word so repeated inserts allocate once.
    pub(crate) word: Option<Arc<str>>,
    pub(crate) frequency: u32,
}

impl Default for TrieNode {
    fn default() -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            ranking: RankingSet::new(),
            word: None,
            frequency: 0,
        }
    }
}

impl TrieNode {
    #[inline]
    pub fn child(&self, slot: CharSlot) -> Option<NodeId> {
        self.children[slot.index()]
    }

    pub(crate) fn set_child(&mut self, slot: CharSlot, id: NodeId) {
        self.children[slot.index()] = Some(id);
    }

    /// Best words reachable through this node.
    pub fn ranking(&self) -> &RankingSet {
        &self.ranking
    }

    /// Returns `true` if some inserted word ends exactly at this node.
    pub fn is_end_of_word(&self) -> bool {
        self.word.is_some()
    }

    /// Occurrences of the word ending here; zero for inner nodes.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Number of existing children.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }
}
