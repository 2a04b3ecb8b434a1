// Bounded top-3 ranking of suggestion candidates
//
// Every trie node owns one RankingSet describing the best complete words
// reachable below it. Search builds short-lived RankingSets of its own from
// these and never mutates the node-owned ones.

use std::cmp::Ordering;
use std::sync::Arc;

/// Number of slots in a ranking set.
pub const RANKING_CAPACITY: usize = 3;

/// Where a candidate's shared prefix with the query is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Recorded by `insert` on a node along the word's own path.
    OnPath,
    /// Re-anchored during search at a prefix of this many characters.
    SharedPrefix(usize),
}

/// A populated ranking slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub anchor: Anchor,
    /// Number of times the word occurred in the corpus.
    pub frequency: u32,
    pub word: Arc<str>,
    /// The character the word takes right after the anchoring prefix.
    /// `None` when the word ends there, which sorts before every character.
    pub diverging: Option<char>,
}

impl Candidate {
    /// A candidate recorded on the word's own path, diverging at `depth`.
    pub fn on_path(word: Arc<str>, frequency: u32, depth: usize) -> Self {
        let diverging = char_at(&word, depth);
        Self {
            anchor: Anchor::OnPath,
            frequency,
            word,
            diverging,
        }
    }

    /// Sort key comparison: higher frequency first, then the smaller
    /// diverging character. `Less` means `self` ranks better.
    pub fn rank_cmp(&self, other: &Candidate) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| self.diverging.cmp(&other.diverging))
    }

    /// Returns `true` if `self` ranks strictly better than `other`.
    #[inline]
    pub fn outranks(&self, other: &Candidate) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }
}

/// Character of an alphabet-valid word at character index `depth`.
fn char_at(word: &str, depth: usize) -> Option<char> {
    word.as_bytes().get(depth).map(|&b| b as char)
}

/// Fixed-capacity, best-first list of suggestion candidates.
///
/// Populated slots are packed at the front and never hold the same word
/// twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingSet {
    slots: [Option<Candidate>; RANKING_CAPACITY],
    len: usize,
}

impl RankingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated slots (0 to 3).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == RANKING_CAPACITY
    }

    /// The candidate at rank `index` (0 is best).
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Populated candidates, best first.
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> + '_ {
        self.slots.iter().map_while(Option::as_ref)
    }

    /// Candidate words, best first.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|c| &*c.word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    fn position(&self, word: &str) -> Option<usize> {
        self.iter().position(|c| &*c.word == word)
    }

    /// Offer a candidate to the set.
    ///
    /// If the word is already ranked, only its frequency is replaced and the
    /// entry moves left past every neighbour it now strictly outranks.
    /// Otherwise the candidate takes the leftmost slot whose occupant it
    /// outranks (or the first empty slot), pushing later entries back and
    /// dropping the previous worst when the set is full.
    pub fn insert(&mut self, candidate: Candidate) {
        if let Some(pos) = self.position(&candidate.word) {
            if let Some(existing) = self.slots[pos].as_mut() {
                existing.frequency = candidate.frequency;
            }
            self.bubble_left(pos);
            return;
        }

        let Some(pos) = self.slots.iter().position(|slot| match slot {
            Some(existing) => candidate.outranks(existing),
            None => true,
        }) else {
            return;
        };

        self.slots[pos..].rotate_right(1);
        self.slots[pos] = Some(candidate);
        if self.len < RANKING_CAPACITY {
            self.len += 1;
        }
    }

    fn bubble_left(&mut self, mut pos: usize) {
        while pos > 0 {
            let moves = match (&self.slots[pos], &self.slots[pos - 1]) {
                (Some(current), Some(previous)) => current.outranks(previous),
                _ => false,
            };
            if !moves {
                break;
            }
            self.slots.swap(pos, pos - 1);
            pos -= 1;
        }
    }

    /// Build a new set from `source`, re-anchoring every candidate at a
    /// shared prefix of `depth` characters.
    ///
    /// Frequency, word and order are kept; the diverging character becomes
    /// the word's character at index `depth`.
    pub fn rebuild_at_depth(source: &RankingSet, depth: usize) -> RankingSet {
        let mut rebuilt = RankingSet::new();
        for (slot, candidate) in rebuilt.slots.iter_mut().zip(source.iter()) {
            *slot = Some(Candidate {
                anchor: Anchor::SharedPrefix(depth),
                frequency: candidate.frequency,
                word: Arc::clone(&candidate.word),
                diverging: char_at(&candidate.word, depth),
            });
        }
        rebuilt.len = source.len;
        rebuilt
    }

    /// Append candidates from `other` that are not already present, in
    /// `other`'s order, until the set is full.
    ///
    /// Returns `true` if the set is full afterwards.
    pub fn merge_from(&mut self, other: &RankingSet) -> bool {
        for candidate in other.iter() {
            if self.is_full() {
                break;
            }
            if self.contains(&candidate.word) {
                continue;
            }
            self.slots[self.len] = Some(candidate.clone());
            self.len += 1;
        }
        self.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(word: &str, frequency: u32, diverging: Option<char>) -> Candidate {
        Candidate {
            anchor: Anchor::OnPath,
            frequency,
            word: Arc::from(word),
            diverging,
        }
    }

    fn words(set: &RankingSet) -> Vec<&str> {
        set.words().collect()
    }

    fn set_of(entries: &[(&str, u32, Option<char>)]) -> RankingSet {
        let mut set = RankingSet::new();
        for &(w, f, d) in entries {
            set.insert(cand(w, f, d));
        }
        set
    }

    #[test]
    fn new_set_is_empty() {
        let set = RankingSet::new();
        assert!(set.is_empty());
        assert!(!set.is_full());
        assert_eq!(set.len(), 0);
        assert_eq!(set.get(0), None);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn higher_frequency_ranks_first() {
        let set = set_of(&[("ab", 1, Some('b')), ("ac", 5, Some('c')), ("ad", 3, Some('d'))]);
        assert_eq!(words(&set), vec!["ac", "ad", "ab"]);
        assert!(set.is_full());
    }

    #[test]
    fn tie_broken_by_smaller_diverging_char() {
        let set = set_of(&[("az", 2, Some('z')), ("aM", 2, Some('M')), ("a5", 2, Some('5'))]);
        // '5' < 'M' < 'z' by character code
        assert_eq!(words(&set), vec!["a5", "aM", "az"]);
    }

    #[test]
    fn word_ending_here_beats_equal_frequency_continuations() {
        let set = set_of(&[("Ib", 1, Some('b')), ("I", 1, None)]);
        assert_eq!(words(&set), vec!["I", "Ib"]);
    }

    #[test]
    fn equal_key_does_not_displace_existing_entry() {
        let set = set_of(&[("IDK", 1, Some('D')), ("IDC", 1, Some('D'))]);
        assert_eq!(words(&set), vec!["IDK", "IDC"]);
    }

    #[test]
    fn full_set_drops_worst_on_better_candidate() {
        let set = set_of(&[
            ("a", 3, None),
            ("b", 2, None),
            ("c", 1, None),
            ("d", 2, Some('a')),
        ]);
        assert_eq!(words(&set), vec!["a", "b", "d"]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn full_set_ignores_worse_candidate() {
        let set = set_of(&[
            ("a", 3, None),
            ("b", 2, None),
            ("c", 2, None),
            ("d", 1, None),
        ]);
        assert_eq!(words(&set), vec!["a", "b", "c"]);
    }

    #[test]
    fn frequency_update_moves_entry_without_duplicating() {
        let mut set = set_of(&[("x1", 1, Some('1')), ("x2", 1, Some('2'))]);
        set.insert(cand("x2", 2, Some('2')));
        assert_eq!(words(&set), vec!["x2", "x1"]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().frequency, 2);
    }

    #[test]
    fn frequency_update_bubbles_past_several_slots() {
        let mut set = set_of(&[("a", 5, Some('a')), ("b", 4, Some('b')), ("c", 3, Some('c'))]);
        set.insert(cand("c", 9, Some('c')));
        assert_eq!(words(&set), vec!["c", "a", "b"]);
    }

    #[test]
    fn frequency_update_stops_at_equal_key() {
        let mut set = set_of(&[("a", 5, Some('a')), ("b", 4, Some('b')), ("c", 3, Some('c'))]);
        set.insert(cand("c", 4, Some('c')));
        // 'b' has the same frequency and a smaller diverging char
        assert_eq!(words(&set), vec!["a", "b", "c"]);
    }

    #[test]
    fn update_keeps_anchor_and_diverging_char() {
        let mut set = set_of(&[("ab", 1, Some('b'))]);
        let mut updated = cand("ab", 4, Some('z'));
        updated.anchor = Anchor::SharedPrefix(9);
        set.insert(updated);
        let c = set.get(0).unwrap();
        assert_eq!(c.frequency, 4);
        assert_eq!(c.diverging, Some('b'));
        assert_eq!(c.anchor, Anchor::OnPath);
    }

    #[test]
    fn rebuild_at_depth_reanchors_and_keeps_order() {
        let source = set_of(&[("IDK", 2, Some('K')), ("IDC", 1, Some('C')), ("ID", 1, None)]);
        assert_eq!(words(&source), vec!["IDK", "ID", "IDC"]);
        let rebuilt = RankingSet::rebuild_at_depth(&source, 1);
        assert_eq!(words(&rebuilt), vec!["IDK", "ID", "IDC"]);
        assert_eq!(rebuilt.len(), 3);
        for c in rebuilt.iter() {
            assert_eq!(c.anchor, Anchor::SharedPrefix(1));
            assert_eq!(c.diverging, Some('D'));
        }
        assert_eq!(rebuilt.get(0).unwrap().frequency, 2);
    }

    #[test]
    fn rebuild_at_word_length_has_no_diverging_char() {
        let source = set_of(&[("If", 1, None)]);
        let rebuilt = RankingSet::rebuild_at_depth(&source, 2);
        assert_eq!(rebuilt.get(0).unwrap().diverging, None);
    }

    #[test]
    fn rebuild_of_empty_set_is_empty() {
        let rebuilt = RankingSet::rebuild_at_depth(&RankingSet::new(), 0);
        assert!(rebuilt.is_empty());
    }

    #[test]
    fn merge_appends_missing_words_in_source_order() {
        let mut result = set_of(&[("If", 1, None)]);
        let ancestor = set_of(&[("I", 3, None), ("IDK", 2, Some('D')), ("IDC", 1, Some('D'))]);
        assert!(result.merge_from(&ancestor));
        assert_eq!(words(&result), vec!["If", "I", "IDK"]);
    }

    #[test]
    fn merge_skips_duplicates() {
        let mut result = set_of(&[("IDK", 2, Some('K')), ("IDC", 1, Some('C'))]);
        let same = result.clone();
        assert!(!result.merge_from(&same));
        assert_eq!(result.len(), 2);

        let ancestor = set_of(&[("I", 3, None), ("IDK", 2, Some('D')), ("IDC", 1, Some('D'))]);
        assert!(result.merge_from(&ancestor));
        assert_eq!(words(&result), vec!["IDK", "IDC", "I"]);
    }

    #[test]
    fn merge_into_full_set_is_a_no_op() {
        let mut result = set_of(&[("a", 3, None), ("b", 2, None), ("c", 1, None)]);
        let other = set_of(&[("z", 9, None)]);
        assert!(result.merge_from(&other));
        assert_eq!(words(&result), vec!["a", "b", "c"]);
    }

    #[test]
    fn merge_reports_not_full_when_source_runs_out() {
        let mut result = RankingSet::new();
        let other = set_of(&[("LOL", 1, Some('O'))]);
        assert!(!result.merge_from(&other));
        assert_eq!(words(&result), vec!["LOL"]);
    }
}
