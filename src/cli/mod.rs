//! Command-line interface for the `lzmatch` binary.
//!
//! | Submodule  | Responsibility |
//! |------------|----------------|
//! | [`args`]   | `clap` argument definitions and conversion to [`ScanOptions`](crate::scan::ScanOptions). |
//! | [`report`] | Per-file and summary lines printed after each scan. |
//!
//! Typical call sequence: `Cli::try_parse` → `Cli::scan_options` →
//! `util::expand_inputs` → `scan::scan_file` per input → `report::file_line`.

pub mod args;
pub mod report;

pub use args::{parse_size, Cli};

pub const PROGRAM_NAME: &str = "lzmatch";

/// Banner printed at display level 3, e.g.
/// `*** lzmatch v0.3.0 64-bit wordwise ***`.
pub fn welcome_message(compare: crate::matcher::CompareMode) -> String {
    format!(
        "*** {} v{} {}-bit {} ***\n",
        PROGRAM_NAME,
        crate::VERSION_STRING,
        std::mem::size_of::<*const ()>() * 8,
        compare.name()
    )
}
