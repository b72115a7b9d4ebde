#![no_main]
use libfuzzer_sys::fuzz_target;

use lzmatch::matcher::{
    longest_match_with, ByteCompare, ChainView, MatchParams, Pos, WordCompare,
};
use lzmatch::Window;

// Layout: 12 parameter bytes, then the window contents. The chain is
// arbitrary (it may point forward, cycle, or reach past max_distance); the
// match finder must still return a well-formed result.
fuzz_target!(|data: &[u8]| {
    if data.len() < 12 {
        return;
    }
    let (hdr, body) = data.split_at(12);
    if body.is_empty() {
        return;
    }
    let Ok(window) = Window::new(body, 9) else {
        return;
    };
    let len = body.len() as Pos;
    let current = u16::from_le_bytes([hdr[0], hdr[1]]) as Pos % len;
    let head = u16::from_le_bytes([hdr[2], hdr[3]]) as Pos % len;
    let lookahead = (hdr[4] as u32 * 2).min(len - current);
    let params = MatchParams {
        chain_budget: hdr[5] as u32,
        good_match_threshold: hdr[6] as u32,
        nice_match_threshold: (hdr[7] as u32).max(1),
        max_distance: (u16::from_le_bytes([hdr[8], hdr[9]]) as u32 % window.max_distance()).max(1),
        lookahead,
        speed_level: (hdr[10] % 10) as u32,
        carried_best_length: (hdr[11] % 16) as u32,
    };

    // Chain links derived from the body so they are arbitrary but reproducible.
    let mask = window.window_mask();
    let prev: Vec<Pos> = (0..=mask)
        .map(|i| body[i as usize % body.len()] as Pos * 3)
        .collect();
    let view = ChainView::new(&prev, mask);

    let r = longest_match_with::<WordCompare>(window.as_slice(), view, current, head, &params);
    let rb = longest_match_with::<ByteCompare>(window.as_slice(), view, current, head, &params);
    assert_eq!(r, rb);

    let cap = lookahead.min(258);
    let baseline = params.carried_best_length.max(1);
    assert!(r.length <= cap);
    assert!(r.length >= baseline.min(lookahead));
    if let Some(pos) = r.position {
        assert!(pos < current);
        assert!(current - pos <= params.max_distance);
        let (a, b, n) = (pos as usize, current as usize, r.length as usize);
        assert_eq!(&body[a..a + n], &body[b..b + n]);
    }
});
