// Integration tests for the chain walk in matcher/search.rs.
//
// Coverage:
//   - chain budget: exhausted before a match / large enough to reach it
//   - good-match threshold quarters the budget (not halves it)
//   - nice-match early exit keeps the nearer, shorter candidate, including
//     a match of exactly nice length and a threshold clamped to lookahead
//   - tie-break: nearest candidate of equal length wins
//   - links at or beyond max_distance end the walk
//   - carried length above lookahead is clamped, position untouched
//   - malformed chains (self links, forward links) terminate

use lzmatch::matcher::{longest_match, longest_match_with, ByteCompare, ChainView, MatchParams, MatchResult, Pos, WordCompare};
use lzmatch::Window;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

const MASK: u32 = 255;

fn params(lookahead: u32) -> MatchParams {
    MatchParams {
        chain_budget: 128,
        good_match_threshold: 258,
        nice_match_threshold: 258,
        max_distance: 32_506,
        lookahead,
        speed_level: 9,
        carried_best_length: 0,
    }
}

/// Write `bytes` at `at`, growing `buf` with `.` filler as needed.
fn put(buf: &mut Vec<u8>, at: usize, bytes: &[u8]) {
    if buf.len() < at + bytes.len() {
        buf.resize(at + bytes.len(), b'.');
    }
    buf[at..at + bytes.len()].copy_from_slice(bytes);
}

/// Link table where each `(from, to)` pair sets `prev[from] = to`.
fn links(pairs: &[(Pos, Pos)]) -> Vec<Pos> {
    let mut prev = vec![0; (MASK + 1) as usize];
    for &(from, to) in pairs {
        prev[from as usize] = to;
    }
    prev
}

fn run(data: &[u8], prev: &[Pos], current: Pos, head: Pos, p: &MatchParams) -> MatchResult {
    let w = Window::new(data, 15).unwrap();
    let view = ChainView::new(prev, MASK);
    let a = longest_match_with::<ByteCompare>(w.as_slice(), view, current, head, p);
    let b = longest_match_with::<WordCompare>(w.as_slice(), view, current, head, p);
    assert_eq!(a, b, "comparators disagree");
    assert_eq!(a, longest_match(w.as_slice(), view, current, head, p));
    a
}

/// current at 100 = "abcdefgh"; head 80 = "abcX" (non-improving),
/// 60 = "abcY" (non-improving), 40 = "abcdefgh" (full match).
fn three_candidates() -> (Vec<u8>, Vec<Pos>) {
    let mut data = Vec::new();
    put(&mut data, 40, b"abcdefgh");
    put(&mut data, 60, b"abcY");
    put(&mut data, 80, b"abcX");
    put(&mut data, 100, b"abcdefgh");
    (data, links(&[(80, 60), (60, 40)]))
}

/// `three_candidates` with one more non-improving link, 50 = "abcW", in
/// front of the full match.
fn four_candidates() -> (Vec<u8>, Vec<Pos>) {
    let (mut data, _) = three_candidates();
    put(&mut data, 50, b"abcW");
    (data, links(&[(80, 60), (60, 50), (50, 40)]))
}

// ─────────────────────────────────────────────────────────────────────────────
// Budget
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn budget_exhausted_before_match() {
    let (data, prev) = three_candidates();
    let p = MatchParams { chain_budget: 2, ..params(8) };
    let r = run(&data, &prev, 100, 80, &p);
    assert_eq!(r, MatchResult { length: 3, position: Some(80) });
}

#[test]
fn budget_reaches_match() {
    let (data, prev) = three_candidates();
    let p = MatchParams { chain_budget: 3, ..params(8) };
    let r = run(&data, &prev, 100, 80, &p);
    assert_eq!(r, MatchResult { length: 8, position: Some(40) });
}

#[test]
fn lowering_budget_never_lengthens() {
    let (data, prev) = three_candidates();
    let mut last = u32::MAX;
    for budget in (1..=4).rev() {
        let p = MatchParams { chain_budget: budget, ..params(8) };
        let r = run(&data, &prev, 100, 80, &p);
        assert!(r.length <= last, "budget {budget}");
        last = r.length;
    }
}

#[test]
fn zero_budget_still_examines_head() {
    let (data, prev) = three_candidates();
    let p = MatchParams { chain_budget: 0, ..params(8) };
    let r = run(&data, &prev, 100, 80, &p);
    assert_eq!(r, MatchResult { length: 3, position: Some(80) });
}

#[test]
fn good_match_quarters_budget() {
    let (data, prev) = four_candidates();
    // Carried 3 >= good 3: budget 8 >> 2 = 2, position 40 is fourth in line.
    let p = MatchParams { chain_budget: 8, good_match_threshold: 3, carried_best_length: 3, ..params(8) };
    assert_eq!(run(&data, &prev, 100, 80, &p), MatchResult::unchanged(3));

    // Carried below good: full budget of 8 reaches position 40.
    let p = MatchParams { good_match_threshold: 4, ..p };
    assert_eq!(run(&data, &prev, 100, 80, &p), MatchResult { length: 8, position: Some(40) });

    // A budget of 4 after the shift reaches it too.
    let p = MatchParams { chain_budget: 16, good_match_threshold: 3, ..p };
    assert_eq!(run(&data, &prev, 100, 80, &p), MatchResult { length: 8, position: Some(40) });
}

// ─────────────────────────────────────────────────────────────────────────────
// Early exit and tie-break
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn nice_match_stops_walk() {
    let mut data = Vec::new();
    put(&mut data, 10, b"abcdefghijklmnop");
    put(&mut data, 50, b"abcdefZ");
    put(&mut data, 100, b"abcdefghijklmnop");
    let prev = links(&[(50, 10)]);
    let p = MatchParams { nice_match_threshold: 4, ..params(16) };
    assert_eq!(run(&data, &prev, 100, 50, &p), MatchResult { length: 6, position: Some(50) });

    let p = MatchParams { nice_match_threshold: 258, ..params(16) };
    assert_eq!(run(&data, &prev, 100, 50, &p), MatchResult { length: 16, position: Some(10) });
}

#[test]
fn match_of_exactly_nice_length_stops_walk() {
    // 150 matches exactly 8 bytes; 20, further down the chain, matches 16.
    let mut data = Vec::new();
    put(&mut data, 20, b"abcdefghijklmnop");
    put(&mut data, 150, b"abcdefghZ");
    put(&mut data, 200, b"abcdefghijklmnop");
    let prev = links(&[(150, 20)]);
    let p = MatchParams { nice_match_threshold: 8, ..params(16) };
    assert_eq!(run(&data, &prev, 200, 150, &p), MatchResult { length: 8, position: Some(150) });

    let p = MatchParams { nice_match_threshold: 9, ..params(16) };
    assert_eq!(run(&data, &prev, 200, 150, &p), MatchResult { length: 16, position: Some(20) });
}

#[test]
fn nice_match_is_clamped_to_lookahead() {
    // Threshold 258 with 8 bytes of lookahead: the first full-length
    // candidate ends the walk.
    let mut data = Vec::new();
    put(&mut data, 20, b"abcdefgh");
    put(&mut data, 150, b"abcdefgh");
    put(&mut data, 200, b"abcdefgh");
    let prev = links(&[(150, 20)]);
    let p = MatchParams { nice_match_threshold: 258, ..params(8) };
    assert_eq!(run(&data, &prev, 200, 150, &p), MatchResult { length: 8, position: Some(150) });
}

#[test]
fn nearest_of_equal_length_wins() {
    let mut data = Vec::new();
    put(&mut data, 5, b"abcdeY");
    put(&mut data, 20, b"abcdeZ");
    put(&mut data, 40, b"abcdeQ");
    let prev = links(&[(20, 5)]);
    let r = run(&data, &prev, 40, 20, &params(6));
    assert_eq!(r, MatchResult { length: 5, position: Some(20) });
}

// ─────────────────────────────────────────────────────────────────────────────
// Distance
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn link_beyond_max_distance_ends_walk() {
    // head 12 does not match; 5 is at distance 11 > 10.
    let mut data = Vec::new();
    put(&mut data, 5, b"abcd");
    put(&mut data, 12, b"Q");
    put(&mut data, 16, b"abcd");
    let prev = links(&[(12, 5)]);
    let p = MatchParams { max_distance: 10, ..params(4) };
    assert_eq!(run(&data, &prev, 16, 12, &p), MatchResult::unchanged(1));

    // The same shape at distance 9 is reachable.
    let mut data = Vec::new();
    put(&mut data, 7, b"abcd");
    put(&mut data, 12, b"Q");
    put(&mut data, 16, b"abcd");
    let prev = links(&[(12, 7)]);
    assert_eq!(run(&data, &prev, 16, 12, &p), MatchResult { length: 4, position: Some(7) });
}

#[test]
fn head_beyond_max_distance_is_ignored() {
    let mut data = Vec::new();
    put(&mut data, 0, b"abcdefgh");
    put(&mut data, 30, b"abcdefgh");
    let p = MatchParams { max_distance: 29, ..params(8) };
    assert_eq!(run(&data, &links(&[]), 30, 0, &p), MatchResult::unchanged(1));
    let p = MatchParams { max_distance: 30, ..params(8) };
    assert_eq!(run(&data, &links(&[]), 30, 0, &p), MatchResult { length: 8, position: Some(0) });
}

// ─────────────────────────────────────────────────────────────────────────────
// Baseline and clamping
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn carried_above_lookahead_is_clamped() {
    let mut data = Vec::new();
    put(&mut data, 0, b"abcdefgh");
    put(&mut data, 30, b"abcdefgh");
    let p = MatchParams { carried_best_length: 6, ..params(4) };
    assert_eq!(run(&data, &links(&[]), 30, 0, &p), MatchResult::unchanged(4));
}

#[test]
fn carried_length_must_be_beaten_strictly() {
    let mut data = Vec::new();
    put(&mut data, 0, b"abcdefgX");
    put(&mut data, 30, b"abcdefgh");
    let p = MatchParams { carried_best_length: 7, ..params(8) };
    assert_eq!(run(&data, &links(&[]), 30, 0, &p), MatchResult::unchanged(7));
    let p = MatchParams { carried_best_length: 6, ..params(8) };
    assert_eq!(run(&data, &links(&[]), 30, 0, &p), MatchResult { length: 7, position: Some(0) });
}

#[test]
fn result_never_exceeds_max_match() {
    let data = vec![b'r'; 1000];
    let r = run(&data, &links(&[]), 300, 0, &params(700));
    assert_eq!(r, MatchResult { length: 258, position: Some(0) });
}

// ─────────────────────────────────────────────────────────────────────────────
// Malformed chains
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn self_link_terminates_on_budget() {
    let mut data = Vec::new();
    put(&mut data, 10, b"abQ");
    put(&mut data, 20, b"abcd");
    let prev = links(&[(10, 10)]);
    let p = MatchParams { chain_budget: 1000, ..params(4) };
    assert_eq!(run(&data, &prev, 20, 10, &p), MatchResult { length: 2, position: Some(10) });
}

#[test]
fn forward_link_stops_walk() {
    let mut data = Vec::new();
    put(&mut data, 10, b"Q");
    put(&mut data, 20, b"abcd");
    put(&mut data, 30, b"abcd");
    let prev = links(&[(10, 30)]);
    assert_eq!(run(&data, &prev, 20, 10, &params(4)), MatchResult::unchanged(1));
}
