//! Configuration errors.
//!
//! The match finder itself is total and never fails; these errors come from
//! validating the parameters and buffers that surround it.

use std::fmt;

/// Invalid configuration or parameter combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Compression level outside `CLEVEL_MIN..=CLEVEL_MAX`.
    LevelInvalid(u32),
    /// Window size logarithm outside `WINDOW_BITS_MIN..=WINDOW_BITS_MAX`.
    WindowBitsInvalid(u32),
    /// Block size below `BLOCK_SIZE_MIN` or not addressable by a `Pos`.
    BlockSizeInvalid(usize),
    /// `max_distance` of zero, or larger than the window can hold.
    MaxDistanceInvalid(u32),
    /// `nice_match_threshold` of zero.
    NiceMatchInvalid(u32),
    /// Input too large to be addressed by 32-bit positions.
    InputTooLarge(usize),
}

impl ConfigError {
    /// Short static name, handy for logs and test assertions.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigError::LevelInvalid(_) => "ERROR_levelInvalid",
            ConfigError::WindowBitsInvalid(_) => "ERROR_windowBitsInvalid",
            ConfigError::BlockSizeInvalid(_) => "ERROR_blockSizeInvalid",
            ConfigError::MaxDistanceInvalid(_) => "ERROR_maxDistanceInvalid",
            ConfigError::NiceMatchInvalid(_) => "ERROR_niceMatchInvalid",
            ConfigError::InputTooLarge(_) => "ERROR_inputTooLarge",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::LevelInvalid(l) => write!(f, "compression level {l} is out of range"),
            ConfigError::WindowBitsInvalid(b) => write!(f, "window bits {b} is out of range"),
            ConfigError::BlockSizeInvalid(s) => write!(f, "block size {s} is out of range"),
            ConfigError::MaxDistanceInvalid(d) => write!(f, "max distance {d} is not usable"),
            ConfigError::NiceMatchInvalid(n) => write!(f, "nice match threshold {n} must be positive"),
            ConfigError::InputTooLarge(n) => write!(f, "input of {n} bytes exceeds 32-bit positions"),
        }
    }
}

impl std::error::Error for ConfigError {}
