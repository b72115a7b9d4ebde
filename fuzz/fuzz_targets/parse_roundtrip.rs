#![no_main]
use libfuzzer_sys::fuzz_target;

use lzmatch::matcher::CompareMode;
use lzmatch::parse::{parse, reconstruct, ParseOptions};

// First byte picks level and window size; the rest is parsed at that setting
// with both comparators.
fuzz_target!(|data: &[u8]| {
    let Some((&sel, body)) = data.split_first() else {
        return;
    };
    let level = 1 + (sel % 9) as u32;
    let window_bits = 9 + ((sel / 9) % 7) as u32;

    let mut opts = ParseOptions { level, window_bits, ..Default::default() };
    opts.compare = CompareMode::Wordwise;
    let word = parse(body, &opts).expect("valid options");
    opts.compare = CompareMode::Bytewise;
    let byte = parse(body, &opts).expect("valid options");
    assert_eq!(word.tokens, byte.tokens);

    let rebuilt = reconstruct(&word.tokens).expect("tokens reference earlier bytes");
    assert_eq!(rebuilt, body);
});
