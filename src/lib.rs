// lzmatch: hash-chain longest-match finder for DEFLATE-family LZ77 compressors

pub mod display;
pub mod error;
pub mod config;
pub mod matcher;
pub mod parse;
pub mod scan;
pub mod util;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 3;
pub const VERSION_RELEASE: u32 = 0;
pub const VERSION_NUMBER: u32 = VERSION_MAJOR * 100 * 100 + VERSION_MINOR * 100 + VERSION_RELEASE;
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version number (`major * 10000 + minor * 100 + release`).
pub fn version_number() -> u32 {
    VERSION_NUMBER
}

pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use error::ConfigError;
pub use matcher::{
    longest_match, longest_match_mode, longest_match_with, ChainView, CompareMode, HashChain,
    MatchParams, MatchResult, Pos, Window,
};
pub use parse::{parse, reconstruct, ParseOptions, ParseStats, Parsed, Token};
pub use scan::{scan_buffer, scan_file, ScanOptions, ScanReport};
