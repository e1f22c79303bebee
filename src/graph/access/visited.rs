//! Visited sets for graph traversals.
//!
//! `VisitedSet` is a dense, word-packed bitset indexed by [`VertexId`]. Each
//! traversal owns one for the duration of a single call; nothing is stored
//! on the graph itself.

use crate::graph::VertexId;

const WORD_BITS: usize = u64::BITS as usize;

/// A dense visited set keyed by vertex identity.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    bits: usize,
    words: Vec<u64>,
    count: usize,
}

impl VisitedSet {
    /// Creates a set able to hold ids `0..bits`, all unvisited.
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            bits,
            words: vec![0; bits.div_ceil(WORD_BITS)],
            count: 0,
        }
    }

    /// Number of ids marked so far.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` iff this call observed `id` as not-yet-visited, and marks it visited.
    ///
    /// # Panics
    /// Panics if `id` is outside the range the set was created for.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, id: VertexId) -> bool {
        let (word, mask) = self.word_mask(id);
        let slot = &mut self.words[word];
        if *slot & mask != 0 {
            return false;
        }
        *slot |= mask;
        self.count += 1;
        true
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, id: VertexId) -> bool {
        let (word, mask) = self.word_mask(id);
        self.words[word] & mask != 0
    }

    #[inline(always)]
    fn word_mask(&self, id: VertexId) -> (usize, u64) {
        let bit = id.index();
        assert!(bit < self.bits, "vertex {id} out of bounds for visited set of {}", self.bits);
        (bit / WORD_BITS, 1u64 << (bit % WORD_BITS))
    }
}
