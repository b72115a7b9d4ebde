//! Parallel block scanner.
//!
//! Input is cut into fixed-size blocks. Every block gets its own window, hash
//! chain and parser, so blocks are parsed concurrently on a dedicated rayon
//! pool and the results are merged in block order. The merged fingerprint is
//! therefore independent of the worker count.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{anyhow, bail, Context, Result};
use rayon::prelude::*;

use crate::config::{self, BLOCK_SIZE_DEFAULT, CLEVEL_DEFAULT, WINDOW_BITS_DEFAULT};
use crate::matcher::{CompareMode, HASH_BITS_DEFAULT};
use crate::parse::{self, reconstruct, ParseOptions, ParseStats};

/// Scanner settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    pub level: u32,
    pub window_bits: u32,
    pub block_size: usize,
    /// Worker threads; 0 means one per logical core.
    pub workers: usize,
    pub compare: CompareMode,
    /// Rebuild every block from its tokens and compare with the input.
    pub verify: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            level: CLEVEL_DEFAULT,
            window_bits: WINDOW_BITS_DEFAULT,
            block_size: BLOCK_SIZE_DEFAULT,
            workers: config::NB_WORKERS_DEFAULT,
            compare: CompareMode::native(),
            verify: false,
        }
    }
}

impl ScanOptions {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            level: self.level,
            window_bits: self.window_bits,
            hash_bits: HASH_BITS_DEFAULT,
            compare: self.compare,
        }
    }
}

/// Outcome of scanning one buffer.
#[derive(Clone, Debug)]
pub struct ScanReport {
    pub bytes: u64,
    pub blocks: usize,
    pub stats: ParseStats,
    pub elapsed: Duration,
    /// `true` when every block was rebuilt successfully; `false` when
    /// verification was not requested.
    pub verified: bool,
}

impl ScanReport {
    /// Input throughput in MB/s (0 for an instantaneous scan).
    pub fn speed_mb_s(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            0.0
        } else {
            self.bytes as f64 / secs / 1_000_000.0
        }
    }
}

/// Parse one block and optionally check that it rebuilds.
fn scan_block(index: usize, block: &[u8], opts: &ScanOptions) -> Result<ParseStats> {
    let parsed = parse::parse(block, &opts.parse_options())
        .with_context(|| format!("block {index}"))?;
    if opts.verify {
        let rebuilt = reconstruct(&parsed.tokens).with_context(|| format!("block {index}"))?;
        if rebuilt != block {
            bail!("block {index}: reconstructed data differs from input");
        }
    }
    crate::displaylevel!(
        4,
        "block {:>5}: {:>8} bytes, {:>7} literals, {:>7} matches, {:>8} searches\n",
        index,
        block.len(),
        parsed.stats.literals,
        parsed.stats.matches,
        parsed.stats.searches
    );
    Ok(parsed.stats)
}

/// Scan an in-memory buffer.
pub fn scan_buffer(data: &[u8], opts: &ScanOptions) -> Result<ScanReport> {
    config::check_level(opts.level)?;
    config::check_window_bits(opts.window_bits)?;
    config::check_block_size(opts.block_size)?;

    let workers = config::resolve_workers(opts.workers);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| anyhow!("cannot start {workers} worker threads: {e}"))?;

    let start = Instant::now();
    let blocks: Vec<&[u8]> = data.chunks(opts.block_size).collect();
    let results: Vec<Result<ParseStats>> = pool.install(|| {
        blocks
            .par_iter()
            .enumerate()
            .map(|(i, block)| scan_block(i, block, opts))
            .collect()
    });
    let per_block = results.into_iter().collect::<Result<Vec<_>>>()?;
    let elapsed = start.elapsed();

    Ok(ScanReport {
        bytes: data.len() as u64,
        blocks: per_block.len(),
        stats: ParseStats::merge(&per_block),
        elapsed,
        verified: opts.verify,
    })
}

/// Read `path` whole and scan it.
pub fn scan_file(path: &Path, opts: &ScanOptions) -> Result<ScanReport> {
    let data = fs::read(path).with_context(|| format!("{}: cannot read", path.display()))?;
    scan_buffer(&data, opts).with_context(|| format!("{}", path.display()))
}
