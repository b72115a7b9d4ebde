// config.rs: Compile-time configuration constants and environment overrides.
//
// Format constants (MIN_MATCH, MAX_MATCH, MIN_LOOKAHEAD) are fixed by the
// DEFLATE format and must not be changed. Everything below the "Tunables"
// banner can be overridden at runtime, either by the matching environment
// variable or by a command-line flag.

use crate::error::ConfigError;

// ── Format constants ──────────────────────────────────────────────────────────

/// Shortest match the format can encode.
pub const MIN_MATCH: usize = 3;

/// Longest match the format can encode.
pub const MAX_MATCH: usize = 258;

/// Minimum amount of lookahead a compressor keeps buffered, except at the end
/// of the input. Bounds the usable back-reference distance to
/// `window_size - MIN_LOOKAHEAD`.
pub const MIN_LOOKAHEAD: usize = MAX_MATCH + MIN_MATCH + 1;

/// Native comparison word width in bytes.
pub const WORD_SIZE: usize = core::mem::size_of::<usize>();

/// Zeroed guard bytes kept past the logical end of every window so the word
/// comparator never has to fall back to bytes near the end of the input.
pub const WINDOW_PADDING: usize = 2 * WORD_SIZE;

/// Speed levels strictly below this value stop the chain walk at the first
/// candidate that does not improve the current best match.
pub const TRIGGER_LEVEL: u32 = 5;

// ── Tunables ──────────────────────────────────────────────────────────────────

/// Fastest compression level.
pub const CLEVEL_MIN: u32 = 1;

/// Default compression level.
/// Can be overridden by the LZMATCH_CLEVEL environment variable at runtime,
/// or by the -l command-line flag.
pub const CLEVEL_DEFAULT: u32 = 6;

/// Slowest compression level.
pub const CLEVEL_MAX: u32 = 9;

/// Window size limits, as a base-two logarithm. 8 is accepted by zlib but
/// silently promoted to 9; here it is simply rejected.
pub const WINDOW_BITS_MIN: u32 = 9;
pub const WINDOW_BITS_DEFAULT: u32 = 15;
pub const WINDOW_BITS_MAX: u32 = 15;

/// Size of the independent blocks scanned by the block scanner.
/// Can be overridden at runtime using the -B command-line flag.
pub const BLOCK_SIZE_DEFAULT: usize = 1 << 20;

/// Smallest accepted block size.
pub const BLOCK_SIZE_MIN: usize = 4 << 10;

/// Default number of worker threads (0 = one per logical core).
/// Can be overridden by the LZMATCH_NBWORKERS environment variable,
/// or by the -T command-line flag.
pub const NB_WORKERS_DEFAULT: usize = 0;

/// Maximum number of scanner worker threads selectable at runtime.
pub const NB_WORKERS_MAX: usize = 200;

pub const ENV_CLEVEL: &str = "LZMATCH_CLEVEL";
pub const ENV_NBWORKERS: &str = "LZMATCH_NBWORKERS";

// ── Environment overrides ─────────────────────────────────────────────────────

/// Compression level from `LZMATCH_CLEVEL`, or [`CLEVEL_DEFAULT`].
///
/// Unparsable or out-of-range values are ignored with a warning.
pub fn clevel_from_env() -> u32 {
    match std::env::var(ENV_CLEVEL) {
        Ok(raw) => match raw.trim().parse::<u32>() {
            Ok(level) if (CLEVEL_MIN..=CLEVEL_MAX).contains(&level) => level,
            _ => {
                crate::displaylevel!(2, "Ignore environment variable setting {}={}: not a valid level\n", ENV_CLEVEL, raw);
                CLEVEL_DEFAULT
            }
        },
        Err(_) => CLEVEL_DEFAULT,
    }
}

/// Worker count from `LZMATCH_NBWORKERS`, or [`NB_WORKERS_DEFAULT`].
pub fn nb_workers_from_env() -> usize {
    match std::env::var(ENV_NBWORKERS) {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(n) => n.min(NB_WORKERS_MAX),
            Err(_) => {
                crate::displaylevel!(2, "Ignore environment variable setting {}={}: not a number\n", ENV_NBWORKERS, raw);
                NB_WORKERS_DEFAULT
            }
        },
        Err(_) => NB_WORKERS_DEFAULT,
    }
}

/// Resolve a requested worker count: 0 means one per logical core.
pub fn resolve_workers(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get().clamp(1, NB_WORKERS_MAX)
    } else {
        requested.min(NB_WORKERS_MAX)
    }
}

pub fn check_level(level: u32) -> Result<u32, ConfigError> {
    if (CLEVEL_MIN..=CLEVEL_MAX).contains(&level) {
        Ok(level)
    } else {
        Err(ConfigError::LevelInvalid(level))
    }
}

pub fn check_window_bits(bits: u32) -> Result<u32, ConfigError> {
    if (WINDOW_BITS_MIN..=WINDOW_BITS_MAX).contains(&bits) {
        Ok(bits)
    } else {
        Err(ConfigError::WindowBitsInvalid(bits))
    }
}

pub fn check_block_size(size: usize) -> Result<usize, ConfigError> {
    if size >= BLOCK_SIZE_MIN && size <= u32::MAX as usize - WINDOW_PADDING {
        Ok(size)
    } else {
        Err(ConfigError::BlockSizeInvalid(size))
    }
}
