// ParseStats consistency against the token stream.

use lzmatch::parse::{fingerprint, parse, ParseOptions, ParseStats, Token};
use lzmatch::CompareMode;

fn sample() -> Vec<u8> {
    b"Peter Piper picked a peck of pickled peppers; a peck of pickled peppers Peter Piper picked. "
        .repeat(50)
}

#[test]
fn counters_match_tokens() {
    let data = sample();
    for level in 1..=9 {
        let parsed = parse(&data, &ParseOptions::with_level(level)).unwrap();
        let s = parsed.stats;
        let literals = parsed.tokens.iter().filter(|t| matches!(t, Token::Literal(_))).count() as u64;
        let matched: u64 = parsed
            .tokens
            .iter()
            .map(|t| match *t {
                Token::Match { length, .. } => length as u64,
                Token::Literal(_) => 0,
            })
            .sum();
        assert_eq!(s.literals, literals);
        assert_eq!(s.matched_bytes, matched);
        assert_eq!(s.literals + s.matched_bytes, s.bytes);
        assert_eq!(s.bytes, data.len() as u64);
        assert!(s.searches >= s.matches);
        assert!(s.improved <= s.searches);
        assert_eq!(s.fingerprint, fingerprint(&parsed.tokens));
    }
}

#[test]
fn fingerprint_is_comparator_independent() {
    let data = sample();
    let mut opts = ParseOptions::with_level(9);
    opts.compare = CompareMode::Bytewise;
    let a = parse(&data, &opts).unwrap().stats;
    opts.compare = CompareMode::Wordwise;
    let b = parse(&data, &opts).unwrap().stats;
    assert_eq!(a, b);
}

#[test]
fn greedy_and_lazy_fingerprints_differ() {
    // Greedy takes "abc" then "defgh"; lazy waits and takes "bcdefgh".
    let data = b"ZabcQ0123bcdefghR4567abcdefgh";
    let greedy = parse(data, &ParseOptions::with_level(1)).unwrap().stats;
    let lazy = parse(data, &ParseOptions::with_level(9)).unwrap().stats;
    assert_ne!(greedy.fingerprint, lazy.fingerprint);
    assert_eq!(greedy.matches, 2);
    assert_eq!(lazy.matches, 1);
}

#[test]
fn greedy_improvements_are_all_matches() {
    // With 4 buckets every 3-byte key of 'a'/'e' text collides, so most
    // heads share only two bytes with the current position. Those must not
    // count as improvements over the carried MIN_MATCH - 1.
    let mut x = 7u32;
    let data: Vec<u8> = (0..4000)
        .map(|_| {
            x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            if (x >> 16) & 1 == 0 { b'a' } else { b'e' }
        })
        .collect();
    for level in 1..=3 {
        let opts = ParseOptions { hash_bits: 2, ..ParseOptions::with_level(level) };
        let s = parse(&data, &opts).unwrap().stats;
        assert!(s.matches > 0, "level {level}");
        assert_eq!(s.improved, s.matches, "level {level}");
    }
}

#[test]
fn repeated_text_is_mostly_covered() {
    let s = parse(&sample(), &ParseOptions::with_level(9)).unwrap().stats;
    assert!(s.coverage_percent() > 50.0);
    assert_eq!(s.longest, 258);
}

#[test]
fn merge_of_one_block_keeps_counters() {
    let data = sample();
    let s = parse(&data, &ParseOptions::default()).unwrap().stats;
    let m = ParseStats::merge(&[s]);
    assert_eq!(m.bytes, s.bytes);
    assert_eq!(m.matches, s.matches);
    assert_eq!(m.longest, s.longest);
}
