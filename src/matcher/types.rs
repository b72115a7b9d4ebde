//! Match-finder types, level table and parameter construction.
//!
//!   - [`Pos`]                → window position / chain link
//!   - [`MatchParams`]        → per-call search parameters
//!   - [`MatchResult`]        → length plus optional new match position
//!   - [`ParseStrategy`]      → greedy or lazy encode loop
//!   - [`LevelParams`]        → one row of the level table
//!   - [`CONFIG_TABLE`]       → level → parameter table
//!   - [`level_params`]       → clamped table lookup

use crate::config::{self, CLEVEL_DEFAULT, CLEVEL_MAX, MIN_LOOKAHEAD};
use crate::error::ConfigError;

/// Position inside a window. Also the value type of the chain link table.
pub type Pos = u32;

/// Chain sentinel: "no earlier position".
pub const NIL: Pos = 0;

// ─────────────────────────────────────────────────────────────────────────────
// Level table
// ─────────────────────────────────────────────────────────────────────────────

/// Which encode loop drives the match finder at a given level.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParseStrategy {
    /// Level 0: no matching at all.
    Stored,
    /// Take the first match found at each position.
    Greedy,
    /// Defer each match by one byte in case the next position matches longer.
    Lazy,
}

/// Per-level tuning. Mirrors the classic DEFLATE configuration table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LevelParams {
    /// Reduce the chain budget when the carried match is at least this long.
    pub good_length: u32,
    /// Lazy: do not search again when the carried match is at least this long.
    /// Greedy: do not insert the positions covered by a match longer than this.
    pub max_lazy: u32,
    /// Stop searching once a match of this length is found.
    pub nice_length: u32,
    /// Maximum chain links followed per search.
    pub max_chain: u32,
    pub strategy: ParseStrategy,
}

/// Level → parameter table. Index is the compression level (0–9).
pub static CONFIG_TABLE: [LevelParams; (CLEVEL_MAX + 1) as usize] = [
    LevelParams { good_length:  0, max_lazy:   0, nice_length:   0, max_chain:    0, strategy: ParseStrategy::Stored }, /* 0, unused */
    LevelParams { good_length:  4, max_lazy:   4, nice_length:   8, max_chain:    4, strategy: ParseStrategy::Greedy }, /* 1 */
    LevelParams { good_length:  4, max_lazy:   5, nice_length:  16, max_chain:    8, strategy: ParseStrategy::Greedy }, /* 2 */
    LevelParams { good_length:  4, max_lazy:   6, nice_length:  32, max_chain:   32, strategy: ParseStrategy::Greedy }, /* 3 */
    LevelParams { good_length:  4, max_lazy:   4, nice_length:  16, max_chain:   16, strategy: ParseStrategy::Lazy   }, /* 4 */
    LevelParams { good_length:  8, max_lazy:  16, nice_length:  32, max_chain:   32, strategy: ParseStrategy::Lazy   }, /* 5 */
    LevelParams { good_length:  8, max_lazy:  16, nice_length: 128, max_chain:  128, strategy: ParseStrategy::Lazy   }, /* 6 */
    LevelParams { good_length:  8, max_lazy:  32, nice_length: 128, max_chain:  256, strategy: ParseStrategy::Lazy   }, /* 7 */
    LevelParams { good_length: 32, max_lazy: 128, nice_length: 258, max_chain: 1024, strategy: ParseStrategy::Lazy   }, /* 8 */
    LevelParams { good_length: 32, max_lazy: 258, nice_length: 258, max_chain: 4096, strategy: ParseStrategy::Lazy   }, /* 9 == CLEVEL_MAX */
];

/// Return the table row for `level`.
///
/// Level 0 maps to [`CLEVEL_DEFAULT`]; levels above [`CLEVEL_MAX`] are clamped.
#[inline]
pub fn level_params(mut level: u32) -> LevelParams {
    if level == 0 {
        level = CLEVEL_DEFAULT;
    }
    CONFIG_TABLE[level.min(CLEVEL_MAX) as usize]
}

/// Largest usable back-reference distance for a window of `1 << window_bits`.
#[inline]
pub fn max_distance_for(window_bits: u32) -> u32 {
    ((1usize << window_bits) - MIN_LOOKAHEAD) as u32
}

// ─────────────────────────────────────────────────────────────────────────────
// Search parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Everything one [`longest_match`](super::search::longest_match) call needs
/// besides the window, the chain and the two positions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MatchParams {
    /// Maximum number of chain links examined.
    pub chain_budget: u32,
    /// Carried length at or above which the budget is quartered.
    pub good_match_threshold: u32,
    /// Length at which the walk stops immediately.
    pub nice_match_threshold: u32,
    /// Largest allowed distance between the current and a matched position.
    pub max_distance: u32,
    /// Valid bytes available at the current position.
    pub lookahead: u32,
    /// Compression level; below `TRIGGER_LEVEL` the walk bails out early.
    pub speed_level: u32,
    /// Length already known from the previous position (0 if none).
    pub carried_best_length: u32,
}

impl MatchParams {
    /// Parameters for `level` with no carried match.
    pub fn for_level(level: u32, max_distance: u32, lookahead: u32) -> Self {
        let row = level_params(level);
        MatchParams {
            chain_budget: row.max_chain,
            good_match_threshold: row.good_length,
            nice_match_threshold: row.nice_length,
            max_distance,
            lookahead,
            speed_level: level.min(CLEVEL_MAX),
            carried_best_length: 0,
        }
    }

    #[inline]
    pub fn with_lookahead(mut self, lookahead: u32) -> Self {
        self.lookahead = lookahead;
        self
    }

    #[inline]
    pub fn with_carried(mut self, carried_best_length: u32) -> Self {
        self.carried_best_length = carried_best_length;
        self
    }

    /// Reject combinations the caller should never hand to the match finder.
    ///
    /// The match finder itself tolerates all of these; validation exists for
    /// callers that build parameters from user input.
    pub fn validate(&self, window_bits: u32) -> Result<(), ConfigError> {
        config::check_window_bits(window_bits)?;
        if self.max_distance == 0 || self.max_distance > max_distance_for(window_bits) {
            return Err(ConfigError::MaxDistanceInvalid(self.max_distance));
        }
        if self.nice_match_threshold == 0 {
            return Err(ConfigError::NiceMatchInvalid(self.nice_match_threshold));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Result
// ─────────────────────────────────────────────────────────────────────────────

/// Outcome of one search.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MatchResult {
    /// Best length, `0 ≤ length ≤ min(lookahead, MAX_MATCH)`.
    pub length: u32,
    /// Start of the match, present only when it beats the carried length.
    pub position: Option<Pos>,
}

impl MatchResult {
    /// No new match; `length` is the clamped baseline.
    #[inline]
    pub fn unchanged(length: u32) -> Self {
        MatchResult { length, position: None }
    }

    /// Store the new position into the caller's best-match field, if any.
    #[inline]
    pub fn apply(&self, best_match_position: &mut Pos) {
        if let Some(pos) = self.position {
            *best_match_position = pos;
        }
    }

    /// `true` when a new, encodable back-reference was found.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.position.is_some() && self.length as usize >= config::MIN_MATCH
    }

    /// Distance from `current_position` back to the match, if any.
    #[inline]
    pub fn distance(&self, current_position: Pos) -> Option<u32> {
        self.position.map(|p| current_position - p)
    }
}
