//! Greedy and lazy LZ77 parse loops driving the match finder.
//!
//! These are the two classic DEFLATE encode loops, minus entropy coding:
//!
//! - **Greedy** (levels 1–3): search at each position with a carried length
//!   of `MIN_MATCH - 1`, take any match of `MIN_MATCH` or more, skip over it.
//! - **Lazy** (levels 4–9): search at each position but hold the result back
//!   one byte; if the next position finds a strictly longer match the held
//!   one is dropped in favour of a literal. The held length is passed to the
//!   match finder as `carried_best_length`, which also drives its
//!   good-match budget reduction.
//!
//! Output is a token stream plus [`ParseStats`]. [`reconstruct`] inverts the
//! stream for verification.

pub mod stats;
pub mod token;

pub use stats::{fingerprint, ParseStats, StatsBuilder};
pub use token::{reconstruct, Token};

use crate::config::{self, CLEVEL_DEFAULT, MIN_MATCH, WINDOW_BITS_DEFAULT};
use crate::error::ConfigError;
use crate::matcher::{
    level_params, longest_match_mode, CompareMode, HashChain, LevelParams, MatchParams, MatchResult,
    ParseStrategy, Pos, Window, HASH_BITS_DEFAULT, NIL,
};

/// Lazy parsing drops a `MIN_MATCH`-long match farther back than this; it
/// would cost more to encode than the literals it replaces.
pub const TOO_FAR: u32 = 4096;

const MIN_MATCH_U32: u32 = MIN_MATCH as u32;

/// Settings for one parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    pub level: u32,
    pub window_bits: u32,
    pub hash_bits: u32,
    pub compare: CompareMode,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            level: CLEVEL_DEFAULT,
            window_bits: WINDOW_BITS_DEFAULT,
            hash_bits: HASH_BITS_DEFAULT,
            compare: CompareMode::native(),
        }
    }
}

impl ParseOptions {
    pub fn with_level(level: u32) -> Self {
        ParseOptions { level, ..Default::default() }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        config::check_level(self.level)?;
        config::check_window_bits(self.window_bits)?;
        Ok(())
    }
}

/// Tokens and counters produced by one parse.
#[derive(Clone, Debug, Default)]
pub struct Parsed {
    pub tokens: Vec<Token>,
    pub stats: ParseStats,
}

/// Parse `data` as one independent block.
pub fn parse(data: &[u8], opts: &ParseOptions) -> Result<Parsed, ConfigError> {
    opts.validate()?;
    let window = Window::new(data, opts.window_bits)?;
    let mut parser = Parser::new(&window, opts);
    match parser.row.strategy {
        ParseStrategy::Stored => parser.run_stored(),
        ParseStrategy::Greedy => parser.run_greedy(),
        ParseStrategy::Lazy => parser.run_lazy(),
    }
    Ok(parser.finish())
}

// ─────────────────────────────────────────────────────────────────────────────
// Parser state
// ─────────────────────────────────────────────────────────────────────────────

struct Parser<'w> {
    window: &'w Window,
    chain: HashChain,
    row: LevelParams,
    params: MatchParams,
    compare: CompareMode,
    tokens: Vec<Token>,
    stats: StatsBuilder,
}

impl<'w> Parser<'w> {
    fn new(window: &'w Window, opts: &ParseOptions) -> Self {
        Parser {
            window,
            chain: HashChain::new(opts.window_bits, opts.hash_bits),
            row: level_params(opts.level),
            params: MatchParams::for_level(opts.level, window.max_distance(), 0),
            compare: opts.compare,
            tokens: Vec::with_capacity(window.len() / 4),
            stats: StatsBuilder::new(),
        }
    }

    fn finish(self) -> Parsed {
        Parsed {
            tokens: self.tokens,
            stats: self.stats.finish(),
        }
    }

    #[inline]
    fn insert(&mut self, pos: Pos) -> Pos {
        self.chain.insert(self.window.as_slice(), pos)
    }

    /// Insert every position in `from..to` that still has `MIN_MATCH` bytes ahead.
    fn insert_range(&mut self, from: Pos, to: Pos) {
        let len = self.window.len() as Pos;
        for p in from..to {
            if len - p >= MIN_MATCH_U32 {
                self.insert(p);
            }
        }
    }

    #[inline]
    fn search(&mut self, pos: Pos, head: Pos, carried: u32) -> MatchResult {
        let params = self
            .params
            .with_lookahead(self.window.lookahead(pos))
            .with_carried(carried);
        let r = longest_match_mode(
            self.compare,
            self.window.as_slice(),
            self.chain.view(),
            pos,
            head,
            &params,
        );
        self.stats.record_search(r.position.is_some());
        r
    }

    #[inline]
    fn emit(&mut self, token: Token) {
        self.stats.record_token(&token);
        self.tokens.push(token);
    }

    #[inline]
    fn emit_literal(&mut self, pos: Pos) {
        let b = self.window.data()[pos as usize];
        self.emit(Token::Literal(b));
    }

    #[inline]
    fn emit_match(&mut self, length: u32, distance: u32) {
        debug_assert!(distance >= 1 && distance <= self.window.max_distance());
        debug_assert!(length as usize >= MIN_MATCH && length as usize <= config::MAX_MATCH);
        self.emit(Token::Match {
            length: length as u16,
            distance: distance as u16,
        });
    }

    /// `true` when `head` is a usable first candidate for `pos`.
    #[inline]
    fn in_reach(&self, pos: Pos, head: Pos) -> bool {
        head != NIL && pos - head <= self.window.max_distance()
    }

    // ── Level 0 ──────────────────────────────────────────────────────────────

    fn run_stored(&mut self) {
        for pos in 0..self.window.len() as Pos {
            self.emit_literal(pos);
        }
    }

    // ── Greedy ───────────────────────────────────────────────────────────────

    fn run_greedy(&mut self) {
        let len = self.window.len() as Pos;
        let max_insert = self.row.max_lazy;
        let mut pos: Pos = 0;

        while pos < len {
            let lookahead = len - pos;
            let head = if lookahead >= MIN_MATCH_U32 { self.insert(pos) } else { NIL };

            let mut found = None;
            if self.in_reach(pos, head) {
                let r = self.search(pos, head, MIN_MATCH_U32 - 1);
                if r.is_match() {
                    found = r.position.map(|start| (r.length, start));
                }
            }

            match found {
                Some((length, start)) => {
                    self.emit_match(length, pos - start);
                    // Long matches are skipped without indexing the bytes they cover.
                    if length <= max_insert {
                        self.insert_range(pos + 1, pos + length);
                    }
                    pos += length;
                }
                None => {
                    self.emit_literal(pos);
                    pos += 1;
                }
            }
        }
    }

    // ── Lazy ─────────────────────────────────────────────────────────────────

    fn run_lazy(&mut self) {
        let len = self.window.len() as Pos;
        let max_lazy = self.row.max_lazy;
        let mut pos: Pos = 0;
        let mut match_length = MIN_MATCH_U32 - 1;
        let mut match_start: Pos = 0;
        let mut match_available = false;

        while pos < len {
            let lookahead = len - pos;
            let head = if lookahead >= MIN_MATCH_U32 { self.insert(pos) } else { NIL };

            let prev_length = match_length;
            let prev_match = match_start;
            match_length = MIN_MATCH_U32 - 1;

            if self.in_reach(pos, head) && prev_length < max_lazy {
                let r = self.search(pos, head, prev_length);
                match_length = r.length;
                r.apply(&mut match_start);
                if match_length == MIN_MATCH_U32 && pos - match_start > TOO_FAR {
                    match_length = MIN_MATCH_U32 - 1;
                }
            }

            if prev_length >= MIN_MATCH_U32 && match_length <= prev_length {
                // The held match at pos - 1 wins; its first two positions are
                // already inserted.
                let start = pos - 1;
                self.emit_match(prev_length, start - prev_match);
                let end = start + prev_length;
                self.insert_range(pos + 1, end);
                match_available = false;
                match_length = MIN_MATCH_U32 - 1;
                pos = end;
            } else if match_available {
                self.emit_literal(pos - 1);
                pos += 1;
            } else {
                match_available = true;
                pos += 1;
            }
        }

        if match_available {
            self.emit_literal(pos - 1);
        }
    }
}
