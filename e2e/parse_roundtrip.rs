// e2e/parse_roundtrip.rs: token streams rebuild their input
//
// Drives the public API end to end (scan → parse → reconstruct) over
// generated corpora of different shapes, every level and every window size.

use lzmatch::config::{WINDOW_BITS_MAX, WINDOW_BITS_MIN};
use lzmatch::parse::{parse, reconstruct, ParseOptions, Token};
use lzmatch::scan::{scan_buffer, ScanOptions};

fn lcg(len: usize, seed: u32, alphabet: u32) -> Vec<u8> {
    let mut s = seed;
    (0..len)
        .map(|_| {
            s = s.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            ((s >> 16) % alphabet) as u8
        })
        .collect()
}

fn corpora() -> Vec<(&'static str, Vec<u8>)> {
    let mut runs = Vec::new();
    for (i, len) in [1usize, 3, 258, 259, 600, 4, 1000].iter().enumerate() {
        runs.extend(std::iter::repeat(b'a' + i as u8).take(*len));
    }
    let mut text = Vec::new();
    for i in 0..3000 {
        text.extend_from_slice(format!("record {:05} status={} ", i % 211, i % 3).as_bytes());
    }
    vec![
        ("random", lcg(40_000, 1, 256)),
        ("binary4", lcg(40_000, 2, 4)),
        ("runs", runs),
        ("text", text),
        ("zeros", vec![0u8; 70_000]),
        ("tiny", b"ab".to_vec()),
        ("empty", Vec::new()),
    ]
}

#[test]
fn every_corpus_level_and_window_round_trips() {
    for (name, data) in corpora() {
        for level in 1..=9 {
            for window_bits in WINDOW_BITS_MIN..=WINDOW_BITS_MAX {
                let opts = ParseOptions { level, window_bits, ..Default::default() };
                let parsed = parse(&data, &opts).unwrap();
                let rebuilt = reconstruct(&parsed.tokens).unwrap();
                assert!(rebuilt == data, "{name} level {level} window {window_bits}");
            }
        }
    }
}

#[test]
fn scanner_verifies_every_corpus() {
    for (name, data) in corpora() {
        let opts = ScanOptions { block_size: 8 << 10, verify: true, workers: 2, ..Default::default() };
        let report = scan_buffer(&data, &opts).unwrap_or_else(|e| panic!("{name}: {e:#}"));
        assert_eq!(report.stats.bytes, data.len() as u64, "{name}");
    }
}

#[test]
fn runs_produce_maximal_matches() {
    let data = vec![7u8; 10_000];
    for level in 1..=9 {
        let parsed = parse(&data, &ParseOptions::with_level(level)).unwrap();
        let full = parsed
            .tokens
            .iter()
            .filter(|t| matches!(t, Token::Match { length: 258, .. }))
            .count();
        assert!(full >= 30, "level {level}: only {full} full-length matches");
    }
}

#[test]
fn random_bytes_are_mostly_literals() {
    let data = lcg(50_000, 9, 256);
    let parsed = parse(&data, &ParseOptions::with_level(9)).unwrap();
    assert!(parsed.stats.coverage_percent() < 5.0);
}
