//! Run-length comparison primitives.
//!
//! The only question the comparator answers is "how many leading bytes do
//! these two slices share, up to `max_len`?". Two implementations exist:
//!
//! - [`WordCompare`] reads one native word (`usize`) from each side, XORs
//!   them, and locates the first differing byte with a trailing-zero count
//!   (leading-zero count on big-endian targets).
//! - [`ByteCompare`] walks byte by byte; it is the reference the word
//!   version is tested against and the fallback on exotic targets.
//!
//! All reads go through checked slice accessors. A wide read that would
//! cross the end of either slice falls back to single bytes, so near the
//! end of a window without guard padding the result is still exact.

use crate::config::WORD_SIZE;

// ─────────────────────────────────────────────────────────────────────────────
// Read helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a native-endian `u16` at `at`, or `None` if it does not fit.
#[inline(always)]
pub fn read16(buf: &[u8], at: usize) -> Option<u16> {
    let bytes = buf.get(at..at.checked_add(2)?)?;
    Some(u16::from_ne_bytes([bytes[0], bytes[1]]))
}

/// Read a native-endian machine word at `at`, or `None` if it does not fit.
#[inline(always)]
pub fn read_word(buf: &[u8], at: usize) -> Option<usize> {
    let bytes = buf.get(at..at.checked_add(WORD_SIZE)?)?;
    bytes.try_into().ok().map(usize::from_ne_bytes)
}

/// Number of identical leading bytes encoded in a non-zero XOR of two words
/// read with [`read_word`].
#[inline(always)]
pub fn nb_common_bytes(diff: usize) -> usize {
    debug_assert!(diff != 0);
    #[cfg(target_endian = "little")]
    {
        (diff.trailing_zeros() >> 3) as usize
    }
    #[cfg(not(target_endian = "little"))]
    {
        (diff.leading_zeros() >> 3) as usize
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparators
// ─────────────────────────────────────────────────────────────────────────────

/// A strategy for measuring the common prefix of two byte runs.
///
/// Implementations must return exactly
/// `a.iter().zip(b).take(max_len).take_while(|(x, y)| x == y).count()`;
/// only the speed may differ.
pub trait MatchCompare {
    /// Human-readable name for reports.
    const NAME: &'static str;

    fn common_prefix(a: &[u8], b: &[u8], max_len: usize) -> usize;
}

/// Byte-at-a-time comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByteCompare;

impl MatchCompare for ByteCompare {
    const NAME: &'static str = "bytewise";

    #[inline]
    fn common_prefix(a: &[u8], b: &[u8], max_len: usize) -> usize {
        a.iter()
            .zip(b)
            .take(max_len)
            .take_while(|(x, y)| x == y)
            .count()
    }
}

/// Word-at-a-time comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordCompare;

impl MatchCompare for WordCompare {
    const NAME: &'static str = "wordwise";

    #[inline]
    fn common_prefix(a: &[u8], b: &[u8], max_len: usize) -> usize {
        let limit = max_len.min(a.len()).min(b.len());
        let mut i = 0usize;

        // Fast path: consume one word at a time. The last word may extend
        // past `limit`; any agreement found there is clipped below.
        while i < limit {
            let (Some(x), Some(y)) = (read_word(a, i), read_word(b, i)) else {
                break;
            };
            let diff = x ^ y;
            if diff != 0 {
                return (i + nb_common_bytes(diff)).min(limit);
            }
            i += WORD_SIZE;
        }

        // Tail: the remaining bytes could not be read as a whole word.
        while i < limit && a[i] == b[i] {
            i += 1;
        }
        i.min(limit)
    }
}

/// Comparator chosen for this target at compile time.
#[cfg(all(
    any(target_pointer_width = "32", target_pointer_width = "64"),
    not(feature = "bytewise")
))]
pub type NativeCompare = WordCompare;

/// Comparator chosen for this target at compile time.
#[cfg(not(all(
    any(target_pointer_width = "32", target_pointer_width = "64"),
    not(feature = "bytewise")
)))]
pub type NativeCompare = ByteCompare;

/// Runtime selection between the two comparators.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CompareMode {
    Bytewise,
    Wordwise,
}

impl CompareMode {
    /// The mode [`NativeCompare`] corresponds to.
    pub fn native() -> Self {
        if NativeCompare::NAME == WordCompare::NAME {
            CompareMode::Wordwise
        } else {
            CompareMode::Bytewise
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CompareMode::Bytewise => ByteCompare::NAME,
            CompareMode::Wordwise => WordCompare::NAME,
        }
    }
}

impl Default for CompareMode {
    fn default() -> Self {
        CompareMode::native()
    }
}
