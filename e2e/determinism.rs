// e2e/determinism.rs: results depend only on the input bytes
//
// The same input must produce the same tokens regardless of comparator,
// worker count or repetition.

use lzmatch::matcher::CompareMode;
use lzmatch::parse::{parse, ParseOptions};
use lzmatch::scan::{scan_buffer, ScanOptions};

fn text(len: usize) -> Vec<u8> {
    let mut s = 77u32;
    let mut out = Vec::with_capacity(len + 32);
    while out.len() < len {
        s = s.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        out.extend_from_slice(format!("k{}=v{}; ", (s >> 16) % 50, (s >> 8) % 7).as_bytes());
    }
    out.truncate(len);
    out
}

#[test]
fn comparators_produce_identical_tokens() {
    let data = text(60_000);
    for level in 1..=9 {
        for window_bits in [9, 12, 15] {
            let mut opts = ParseOptions { level, window_bits, ..Default::default() };
            opts.compare = CompareMode::Bytewise;
            let a = parse(&data, &opts).unwrap();
            opts.compare = CompareMode::Wordwise;
            let b = parse(&data, &opts).unwrap();
            assert_eq!(a.tokens, b.tokens, "level {level} window {window_bits}");
        }
    }
}

#[test]
fn repeated_parses_agree() {
    let data = text(30_000);
    let opts = ParseOptions::with_level(7);
    let first = parse(&data, &opts).unwrap();
    for _ in 0..3 {
        let again = parse(&data, &opts).unwrap();
        assert_eq!(again.tokens, first.tokens);
        assert_eq!(again.stats, first.stats);
    }
}

#[test]
fn worker_counts_agree_on_many_blocks() {
    let data = text(200_000);
    let base = ScanOptions { block_size: 4 << 10, workers: 1, ..Default::default() };
    let expected = scan_buffer(&data, &base).unwrap().stats;
    for workers in [2, 5, 16] {
        let got = scan_buffer(&data, &ScanOptions { workers, ..base }).unwrap().stats;
        assert_eq!(got, expected, "{workers} workers");
    }
}
