//! Longest-match search over a hash chain.
//!
//! Given the current position and the head of its hash chain, walk earlier
//! positions newest to oldest and return the longest run that repeats the
//! bytes at the current position. The walk is bounded by:
//!
//! 1. a chain budget (quartered when the carried match is already good),
//! 2. a distance limit,
//! 3. a "nice" length at which any match is good enough,
//! 4. at low speed levels, the first candidate that does not improve.
//!
//! Each candidate first goes through a quick-reject probe: a candidate can only
//! beat `best_len` if it agrees with the current string at offsets
//! `best_len - 1` and `best_len`, and at its first two bytes. Survivors are
//! measured by a [`MatchCompare`] implementation starting at offset 2.
//!
//! The result never depends on bytes at or past `current + lookahead`: every
//! count is capped at `min(lookahead, MAX_MATCH)` and the probe offsets stay
//! below that cap.

use crate::config::{MAX_MATCH, TRIGGER_LEVEL};
use crate::matcher::chain::ChainView;
use crate::matcher::compare::{read16, ByteCompare, CompareMode, MatchCompare, NativeCompare, WordCompare};
use crate::matcher::types::{MatchParams, MatchResult, Pos};

/// Find the longest match for `current` using the target's native comparator.
///
/// `window` must contain the bytes at `current .. current + params.lookahead`;
/// trailing guard bytes let the comparator read whole words up to that end.
/// `head` is the first candidate, normally the chain head for the current
/// string's hash; it is examined only if it lies strictly before `current`
/// and within `params.max_distance`.
///
/// The returned position is `Some` only when the match is strictly longer
/// than the baseline (`carried_best_length`, or 1 when that is zero).
#[inline]
pub fn longest_match(
    window: &[u8],
    chain: ChainView<'_>,
    current: Pos,
    head: Pos,
    params: &MatchParams,
) -> MatchResult {
    longest_match_with::<NativeCompare>(window, chain, current, head, params)
}

/// [`longest_match`] with a comparator picked at runtime.
#[inline]
pub fn longest_match_mode(
    mode: CompareMode,
    window: &[u8],
    chain: ChainView<'_>,
    current: Pos,
    head: Pos,
    params: &MatchParams,
) -> MatchResult {
    match mode {
        CompareMode::Bytewise => longest_match_with::<ByteCompare>(window, chain, current, head, params),
        CompareMode::Wordwise => longest_match_with::<WordCompare>(window, chain, current, head, params),
    }
}

/// [`longest_match`] generic over the comparison primitive.
pub fn longest_match_with<C: MatchCompare>(
    window: &[u8],
    chain: ChainView<'_>,
    current: Pos,
    head: Pos,
    params: &MatchParams,
) -> MatchResult {
    // ── Setup ────────────────────────────────────────────────────────────────
    let lookahead = params.lookahead as usize;
    let max_len = MAX_MATCH.min(lookahead);

    let mut best_len = match params.carried_best_length {
        0 => 1,
        n => n as usize,
    };
    let baseline = MatchResult::unchanged(best_len.min(max_len) as u32);

    // Nothing the remaining input could prove would beat the baseline.
    if best_len >= max_len {
        return baseline;
    }

    let mut budget = params.chain_budget;
    if best_len >= params.good_match_threshold as usize {
        budget >>= 2;
    }
    // The head is always examined.
    let mut budget = budget.max(1);

    let nice_match = (params.nice_match_threshold as usize).min(max_len);

    // Links at or below `limit` are too far back. This also makes 0 an
    // end-of-chain marker for links.
    let limit = current.saturating_sub(params.max_distance);

    if head >= current || current - head > params.max_distance {
        return baseline;
    }

    let Some(scan) = window.get(current as usize..) else {
        return baseline;
    };
    let (Some(scan_start), Some(mut scan_end)) = (read16(scan, 0), read16(scan, best_len - 1)) else {
        return baseline;
    };
    let scan_tail = scan.get(2..).unwrap_or(&[]);

    // ── Chain walk ───────────────────────────────────────────────────────────
    let mut best_pos: Option<Pos> = None;
    let mut cur_match = head;

    loop {
        // Chain links must point strictly into the past.
        if cur_match >= current {
            break;
        }
        let candidate = window.get(cur_match as usize..).unwrap_or(&[]);

        let mut improved = false;
        if read16(candidate, best_len - 1) == Some(scan_end) && read16(candidate, 0) == Some(scan_start) {
            let tail = candidate.get(2..).unwrap_or(&[]);
            let len = 2 + C::common_prefix(scan_tail, tail, max_len - 2);

            if len > best_len {
                best_pos = Some(cur_match);
                best_len = len;
                if len >= nice_match {
                    break;
                }
                // len < nice_match <= max_len, so the probe stays in bounds.
                match read16(scan, best_len - 1) {
                    Some(v) => scan_end = v,
                    None => break,
                }
                improved = true;
            }
        }

        if !improved && params.speed_level < TRIGGER_LEVEL {
            break;
        }

        budget -= 1;
        if budget == 0 {
            break;
        }
        match chain.next(cur_match) {
            Some(next) if next > limit => cur_match = next,
            _ => break,
        }
    }

    // ── Result ───────────────────────────────────────────────────────────────
    MatchResult {
        length: best_len.min(max_len) as u32,
        position: best_pos,
    }
}
