//! Binary entry point for the `lzmatch` command-line tool.
//!
//! # Control flow
//!
//! 1. [`Cli::try_parse`] processes all flags.
//! 2. Flags, environment and defaults are resolved into [`ScanOptions`].
//! 3. Directory inputs are expanded, then each file is scanned and reported.
//!
//! Returns exit code 0 when every file was scanned (and, with `--verify`,
//! rebuilt) successfully, 1 otherwise.

use clap::Parser;

use lzmatch::cli::{report, welcome_message, Cli, PROGRAM_NAME};
use lzmatch::display::{display_level, set_display_level};
use lzmatch::scan::{scan_file, ScanOptions};
use lzmatch::util::expand_inputs;
use lzmatch::{display, displaylevel, displayout};

fn run(cli: Cli) -> i32 {
    set_display_level(cli.display_level());

    let opts: ScanOptions = match cli.scan_options() {
        Ok(opts) => opts,
        Err(e) => {
            display!("{}: {}\n", PROGRAM_NAME, e);
            return 1;
        }
    };

    displaylevel!(3, "{}", welcome_message(opts.compare));
    displaylevel!(
        3,
        "level {}, window {} bits, blocks of {}, {} worker(s)\n",
        opts.level,
        opts.window_bits,
        lzmatch::util::human_size(opts.block_size as u64),
        lzmatch::config::resolve_workers(opts.workers)
    );

    let files = match expand_inputs(&cli.paths, cli.recursive) {
        Ok(files) => files,
        Err(e) => {
            display!("{}: {}\n", PROGRAM_NAME, e);
            return 1;
        }
    };
    if files.is_empty() {
        display!("{}: no input files\n", PROGRAM_NAME);
        return 1;
    }

    let mut failed = 0usize;
    let mut total_bytes = 0u64;
    let mut total_matched = 0u64;
    for path in &files {
        match scan_file(path, &opts) {
            Ok(r) => {
                total_bytes += r.bytes;
                total_matched += r.stats.matched_bytes;
                if display_level() >= 1 {
                    displayout!("{}\n", report::file_line(path, &r));
                }
                displaylevel!(3, "{}\n", report::detail_line(&r));
            }
            Err(e) => {
                displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, e);
                failed += 1;
            }
        }
    }

    if files.len() > 1 {
        displaylevel!(2, "{}\n", report::total_line(files.len() - failed, total_bytes, total_matched));
    }

    if failed == 0 {
        0
    } else {
        1
    }
}

fn main() {
    let code = match Cli::try_parse() {
        Ok(cli) => run(cli),
        Err(e) => {
            let _ = e.print();
            // Help and version go to stdout and are not failures.
            if e.use_stderr() {
                1
            } else {
                0
            }
        }
    };
    std::process::exit(code);
}
