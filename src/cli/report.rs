//! Report lines printed after each scan.

use std::path::Path;

use crate::scan::ScanReport;
use crate::util::human_size;

/// One line per scanned file, e.g.
/// `book.txt: 1.50 MiB, 2 blocks, 41233 literals, 90121 matches (avg 16.9), 97.4% matched, fp 5d1f…`.
pub fn file_line(path: &Path, report: &ScanReport) -> String {
    let s = &report.stats;
    let mut line = format!(
        "{}: {}, {} block{}, {} literals, {} matches (avg {:.1}), {:.1}% matched, fp {:016x}",
        path.display(),
        human_size(report.bytes),
        report.blocks,
        if report.blocks == 1 { "" } else { "s" },
        s.literals,
        s.matches,
        s.mean_match_length(),
        s.coverage_percent(),
        s.fingerprint
    );
    if report.verified {
        line.push_str(", verified");
    }
    line
}

/// Search counters and timing, shown at display level 3.
pub fn detail_line(report: &ScanReport) -> String {
    let s = &report.stats;
    format!(
        "  {} searches, {} improved, longest {}, {:.3} s, {:.1} MB/s",
        s.searches,
        s.improved,
        s.longest,
        report.elapsed.as_secs_f64(),
        report.speed_mb_s()
    )
}

/// Totals line after several files.
pub fn total_line(files: usize, bytes: u64, matched: u64) -> String {
    let pct = if bytes == 0 { 0.0 } else { 100.0 * matched as f64 / bytes as f64 };
    format!("{} files, {} total, {:.1}% matched", files, human_size(bytes), pct)
}
