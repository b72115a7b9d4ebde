//! Command-line argument definitions.
//!
//! Sizes accept the usual binary suffixes (`64K`, `1M`, `1MiB`, `1MB`).
//! The compression level and worker count
//! fall back to the `LZMATCH_CLEVEL` and `LZMATCH_NBWORKERS` environment
//! variables when the flags are absent.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, BLOCK_SIZE_DEFAULT, WINDOW_BITS_DEFAULT, WINDOW_BITS_MAX, WINDOW_BITS_MIN};
use crate::error::ConfigError;
use crate::matcher::CompareMode;
use crate::scan::ScanOptions;

/// Parse a size with an optional `K`, `M` or `G` suffix, each optionally
/// followed by `i` and/or `B`.
pub fn parse_size(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if digits_end == 0 {
        return Err(format!("'{s}' is not a size"));
    }
    let value: usize = s[..digits_end]
        .parse()
        .map_err(|_| format!("'{s}' is too large"))?;
    let shift = match &s[digits_end..] {
        "" | "B" => 0,
        "K" | "KB" | "KiB" => 10,
        "M" | "MB" | "MiB" => 20,
        "G" | "GB" | "GiB" => 30,
        other => return Err(format!("unknown size suffix '{other}'")),
    };
    value
        .checked_mul(1usize << shift)
        .ok_or_else(|| format!("'{s}' is too large"))
}

/// Measure how well a DEFLATE-style hash-chain match finder covers the given files.
#[derive(Debug, Parser)]
#[command(name = "lzmatch", version, about)]
pub struct Cli {
    /// Files to scan (directories need -r).
    #[arg(required = true, value_name = "FILE")]
    pub paths: Vec<PathBuf>,

    /// Compression level, 1 (fastest) to 9 (best) [env: LZMATCH_CLEVEL, default: 6].
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u32).range(1..=9))]
    pub level: Option<u32>,

    /// Window size as a base-two logarithm.
    #[arg(
        short = 'w',
        long,
        default_value_t = WINDOW_BITS_DEFAULT,
        value_parser = clap::value_parser!(u32).range(WINDOW_BITS_MIN as i64..=WINDOW_BITS_MAX as i64)
    )]
    pub window_bits: u32,

    /// Independent block size, e.g. 256K or 4M.
    #[arg(short = 'B', long, default_value_t = BLOCK_SIZE_DEFAULT, value_parser = parse_size)]
    pub block_size: usize,

    /// Worker threads, 0 for one per core [env: LZMATCH_NBWORKERS].
    #[arg(short = 'T', long)]
    pub threads: Option<usize>,

    /// Walk directories recursively.
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Force the portable byte-at-a-time comparator.
    #[arg(long)]
    pub bytewise: bool,

    /// Rebuild every block from its tokens and compare with the input.
    #[arg(long)]
    pub verify: bool,

    /// More output (repeatable).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Less output (repeatable).
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    /// Display level after applying `-v` and `-q` to the default of 2.
    pub fn display_level(&self) -> u32 {
        (2 + self.verbose as u32).saturating_sub(self.quiet as u32)
    }

    pub fn compare_mode(&self) -> CompareMode {
        if self.bytewise {
            CompareMode::Bytewise
        } else {
            CompareMode::native()
        }
    }

    /// Resolve flags, environment and defaults into scanner settings.
    pub fn scan_options(&self) -> Result<ScanOptions, ConfigError> {
        let level = match self.level {
            Some(level) => level,
            None => config::clevel_from_env(),
        };
        let workers = match self.threads {
            Some(n) => n,
            None => config::nb_workers_from_env(),
        };
        Ok(ScanOptions {
            level: config::check_level(level)?,
            window_bits: config::check_window_bits(self.window_bits)?,
            block_size: config::check_block_size(self.block_size)?,
            workers,
            compare: self.compare_mode(),
            verify: self.verify,
        })
    }
}
