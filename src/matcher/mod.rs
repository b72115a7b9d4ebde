//! Hash-chain longest-match finder.
//!
//! [`search::longest_match`] is the core; the rest of the module provides the
//! data it walks ([`window::Window`], [`chain::ChainView`]), the parameters it
//! consumes ([`types::MatchParams`]) and the comparison primitive it is
//! generic over ([`compare::MatchCompare`]).

pub mod chain;
pub mod compare;
pub mod search;
pub mod types;
pub mod window;

pub use chain::{ChainView, HashChain, HASH_BITS_DEFAULT};
pub use compare::{ByteCompare, CompareMode, MatchCompare, NativeCompare, WordCompare};
pub use search::{longest_match, longest_match_mode, longest_match_with};
pub use types::{
    level_params, max_distance_for, LevelParams, MatchParams, MatchResult, ParseStrategy, Pos,
    CONFIG_TABLE, NIL,
};
pub use window::Window;
