//! Hash-chain tables.
//!
//! [`ChainView`] is the read-only view the match finder walks:
//! `next(pos) = prev[pos & mask]`, newest to oldest, `0` meaning "none".
//!
//! [`HashChain`] is a reference maintainer for those tables, used by the
//! parsers, benchmarks and tests. It hashes the first [`MIN_MATCH`] bytes at
//! each position the way zlib's rolling `UPDATE_HASH` does after three steps,
//! so positions can be inserted in any order. Nothing in the match finder
//! depends on this particular hash.

use crate::config::MIN_MATCH;
use crate::matcher::types::{Pos, NIL};

/// Default hash table size, as a base-two logarithm (zlib: `memLevel 8 + 7`).
pub const HASH_BITS_DEFAULT: u32 = 15;

// ─────────────────────────────────────────────────────────────────────────────
// Read-only view
// ─────────────────────────────────────────────────────────────────────────────

/// Borrowed link table plus the mask that folds positions into it.
#[derive(Clone, Copy, Debug)]
pub struct ChainView<'a> {
    prev: &'a [Pos],
    mask: u32,
}

impl<'a> ChainView<'a> {
    /// `prev` should hold at least `mask + 1` entries; links that fall
    /// outside it read as the end of the chain.
    #[inline]
    pub fn new(prev: &'a [Pos], mask: u32) -> Self {
        ChainView { prev, mask }
    }

    /// The position inserted before `pos` in the same bucket, if any.
    #[inline(always)]
    pub fn next(&self, pos: Pos) -> Option<Pos> {
        self.prev.get((pos & self.mask) as usize).copied()
    }

    #[inline]
    pub fn mask(&self) -> u32 {
        self.mask
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reference maintainer
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct HashChain {
    head: Vec<Pos>,
    prev: Vec<Pos>,
    window_mask: u32,
    hash_mask: u32,
    hash_shift: u32,
}

impl HashChain {
    /// Empty tables for a window of `1 << window_bits` and `1 << hash_bits` buckets.
    pub fn new(window_bits: u32, hash_bits: u32) -> Self {
        let window_size = 1usize << window_bits;
        let hash_size = 1usize << hash_bits;
        HashChain {
            head: vec![NIL; hash_size],
            prev: vec![NIL; window_size],
            window_mask: (window_size - 1) as u32,
            hash_mask: (hash_size - 1) as u32,
            hash_shift: hash_bits.div_ceil(MIN_MATCH as u32),
        }
    }

    /// Bucket of the [`MIN_MATCH`] bytes at `pos`. Bytes past the end of
    /// `window` hash as zero.
    #[inline]
    pub fn hash_at(&self, window: &[u8], pos: Pos) -> u32 {
        let byte = |k: usize| window.get(pos as usize + k).copied().unwrap_or(0) as u32;
        let mut h = 0u32;
        for k in 0..MIN_MATCH {
            h = ((h << self.hash_shift) ^ byte(k)) & self.hash_mask;
        }
        h
    }

    /// Link `pos` at the front of its bucket and return the previous head
    /// ([`NIL`] if the bucket was empty).
    #[inline]
    pub fn insert(&mut self, window: &[u8], pos: Pos) -> Pos {
        let h = self.hash_at(window, pos) as usize;
        let head = self.head[h];
        self.prev[(pos & self.window_mask) as usize] = head;
        self.head[h] = pos;
        head
    }

    /// Current head of the bucket `pos` hashes to, without inserting.
    #[inline]
    pub fn head_of(&self, window: &[u8], pos: Pos) -> Pos {
        self.head[self.hash_at(window, pos) as usize]
    }

    #[inline]
    pub fn view(&self) -> ChainView<'_> {
        ChainView::new(&self.prev, self.window_mask)
    }

    #[inline]
    pub fn prev_slice(&self) -> &[Pos] {
        &self.prev
    }

    #[inline]
    pub fn window_mask(&self) -> u32 {
        self.window_mask
    }

    /// Forget every inserted position.
    pub fn clear(&mut self) {
        self.head.fill(NIL);
        self.prev.fill(NIL);
    }
}
