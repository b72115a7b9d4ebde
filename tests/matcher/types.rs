// Level table, parameter construction and validation.

use lzmatch::config::{CLEVEL_DEFAULT, CLEVEL_MAX};
use lzmatch::matcher::{level_params, max_distance_for, MatchParams, MatchResult, ParseStrategy, CONFIG_TABLE};
use lzmatch::ConfigError;

#[test]
fn effort_grows_within_each_strategy() {
    for range in [1..=3usize, 4..=CLEVEL_MAX as usize] {
        let rows: Vec<_> = range.map(|l| CONFIG_TABLE[l]).collect();
        for pair in rows.windows(2) {
            assert!(pair[1].max_chain >= pair[0].max_chain);
            assert!(pair[1].nice_length >= pair[0].nice_length);
        }
    }
    assert!(CONFIG_TABLE.iter().all(|row| row.nice_length <= 258));
}

#[test]
fn strategy_switches_at_level_four() {
    for level in 1..=3 {
        assert_eq!(level_params(level).strategy, ParseStrategy::Greedy);
    }
    for level in 4..=9 {
        assert_eq!(level_params(level).strategy, ParseStrategy::Lazy);
    }
}

#[test]
fn for_level_copies_row() {
    let p = MatchParams::for_level(8, max_distance_for(15), 100);
    assert_eq!(p.chain_budget, 1024);
    assert_eq!(p.good_match_threshold, 32);
    assert_eq!(p.nice_match_threshold, 258);
    assert_eq!(p.max_distance, 32_506);
    assert_eq!(p.lookahead, 100);
    assert_eq!(p.speed_level, 8);
    assert_eq!(p.carried_best_length, 0);
}

#[test]
fn builders_only_touch_their_field() {
    let p = MatchParams::for_level(CLEVEL_DEFAULT, 1000, 0);
    let q = p.with_lookahead(77).with_carried(4);
    assert_eq!(q.lookahead, 77);
    assert_eq!(q.carried_best_length, 4);
    assert_eq!(MatchParams { lookahead: 0, carried_best_length: 0, ..q }, p);
}

#[test]
fn validate_checks_distance_and_nice() {
    let p = MatchParams::for_level(6, max_distance_for(12), 0);
    assert_eq!(p.validate(12), Ok(()));
    assert_eq!(p.validate(11), Err(ConfigError::MaxDistanceInvalid(max_distance_for(12))));
    assert_eq!(p.validate(20), Err(ConfigError::WindowBitsInvalid(20)));
    let zero = MatchParams { max_distance: 0, ..p };
    assert_eq!(zero.validate(12), Err(ConfigError::MaxDistanceInvalid(0)));
    let no_nice = MatchParams { nice_match_threshold: 0, ..p };
    assert_eq!(no_nice.validate(12), Err(ConfigError::NiceMatchInvalid(0)));
}

#[test]
fn result_helpers() {
    let r = MatchResult { length: 3, position: Some(7) };
    assert!(r.is_match());
    assert_eq!(r.distance(10), Some(3));
    assert!(!MatchResult { length: 2, position: Some(7) }.is_match());
    assert!(!MatchResult::unchanged(9).is_match());
    assert_eq!(MatchResult::unchanged(9).distance(10), None);
}
