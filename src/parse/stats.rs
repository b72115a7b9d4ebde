//! Parse statistics and the token-stream fingerprint.
//!
//! The fingerprint is an XXH64 over a canonical byte encoding of the tokens.
//! Two parses with the same fingerprint made the same decisions, which is how
//! the CLI and the tests check that the match finder is deterministic across
//! comparators and thread counts.

use xxhash_rust::xxh64::{xxh64, Xxh64};

use super::token::Token;

const FINGERPRINT_SEED: u64 = 0;

/// Counters gathered while parsing one block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Input bytes covered.
    pub bytes: u64,
    pub literals: u64,
    pub matches: u64,
    /// Bytes covered by matches.
    pub matched_bytes: u64,
    /// Calls into the match finder.
    pub searches: u64,
    /// Calls that returned a new position.
    pub improved: u64,
    /// Longest match emitted.
    pub longest: u32,
    pub fingerprint: u64,
}

impl ParseStats {
    /// Mean length of emitted matches (0 when there are none).
    pub fn mean_match_length(&self) -> f64 {
        if self.matches == 0 {
            0.0
        } else {
            self.matched_bytes as f64 / self.matches as f64
        }
    }

    /// Share of the input covered by matches, in percent.
    pub fn coverage_percent(&self) -> f64 {
        if self.bytes == 0 {
            0.0
        } else {
            100.0 * self.matched_bytes as f64 / self.bytes as f64
        }
    }

    /// Combine per-block stats in block order. The merged fingerprint hashes
    /// the block fingerprints, so it depends on the order of `parts`.
    pub fn merge(parts: &[ParseStats]) -> ParseStats {
        let mut total = ParseStats::default();
        let mut digest = Xxh64::new(FINGERPRINT_SEED);
        for p in parts {
            total.bytes += p.bytes;
            total.literals += p.literals;
            total.matches += p.matches;
            total.matched_bytes += p.matched_bytes;
            total.searches += p.searches;
            total.improved += p.improved;
            total.longest = total.longest.max(p.longest);
            digest.update(&p.fingerprint.to_le_bytes());
        }
        total.fingerprint = digest.digest();
        total
    }
}

/// Incremental stats builder fed by the parse loops.
pub struct StatsBuilder {
    stats: ParseStats,
    digest: Xxh64,
}

impl StatsBuilder {
    pub fn new() -> Self {
        StatsBuilder {
            stats: ParseStats::default(),
            digest: Xxh64::new(FINGERPRINT_SEED),
        }
    }

    #[inline]
    pub fn record_search(&mut self, improved: bool) {
        self.stats.searches += 1;
        if improved {
            self.stats.improved += 1;
        }
    }

    #[inline]
    pub fn record_token(&mut self, token: &Token) {
        match *token {
            Token::Literal(b) => {
                self.stats.literals += 1;
                self.stats.bytes += 1;
                self.digest.update(&[0, b]);
            }
            Token::Match { length, distance } => {
                self.stats.matches += 1;
                self.stats.bytes += length as u64;
                self.stats.matched_bytes += length as u64;
                self.stats.longest = self.stats.longest.max(length as u32);
                let [l0, l1] = length.to_le_bytes();
                let [d0, d1] = distance.to_le_bytes();
                self.digest.update(&[1, l0, l1, d0, d1]);
            }
        }
    }

    pub fn finish(mut self) -> ParseStats {
        self.stats.fingerprint = self.digest.digest();
        self.stats
    }
}

impl Default for StatsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fingerprint of a token slice, equal to what [`StatsBuilder`] produces.
pub fn fingerprint(tokens: &[Token]) -> u64 {
    let mut encoded = Vec::with_capacity(tokens.len() * 2);
    for token in tokens {
        match *token {
            Token::Literal(b) => encoded.extend_from_slice(&[0, b]),
            Token::Match { length, distance } => {
                encoded.push(1);
                encoded.extend_from_slice(&length.to_le_bytes());
                encoded.extend_from_slice(&distance.to_le_bytes());
            }
        }
    }
    xxh64(&encoded, FINGERPRINT_SEED)
}
