// e2e/cli_integration.rs: CLI integration tests
//
// Runs the `lzmatch` binary as a black box with std::process::Command.
// Covers report output, verification, recursion, verbosity, environment
// overrides and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `lzmatch` binary produced by Cargo.
fn lzmatch_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_lzmatch") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("lzmatch");
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(lzmatch_bin())
        .args(args)
        .env_remove("LZMATCH_CLEVEL")
        .env_remove("LZMATCH_NBWORKERS")
        .output()
        .expect("failed to run lzmatch")
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

fn stderr(o: &Output) -> String {
    String::from_utf8_lossy(&o.stderr).into_owned()
}

/// The `fp` field of a report line.
fn fingerprint(o: &Output) -> String {
    let out = stdout(o);
    let at = out.find("fp ").expect("report has a fingerprint");
    out[at + 3..at + 19].to_string()
}

/// Greedy and lazy parses of this differ.
const DEFER: &str = "ZabcQ0123bcdefghR4567abcdefgh";

fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "Hello, match finder!\n".repeat(400)).unwrap();
    (dir, input)
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

// ── 1. Report ─────────────────────────────────────────────────────────────────

#[test]
fn test_cli_reports_file() {
    let (_dir, input) = make_temp_input();
    let o = run(&[path_str(&input)]);
    assert!(o.status.success(), "stderr: {}", stderr(&o));
    let out = stdout(&o);
    assert!(out.contains("input.txt: "), "{out}");
    assert!(out.contains(" matches (avg "), "{out}");
    assert!(out.contains("% matched, fp "), "{out}");
    assert!(!out.contains("verified"));
}

#[test]
fn test_cli_verify() {
    let (_dir, input) = make_temp_input();
    let o = run(&["--verify", "-l", "9", path_str(&input)]);
    assert!(o.status.success(), "stderr: {}", stderr(&o));
    assert!(stdout(&o).contains(", verified"));
}

// ── 2. --version / --help ────────────────────────────────────────────────────

#[test]
fn test_cli_version() {
    let o = run(&["--version"]);
    assert!(o.status.success());
    assert!(stdout(&o).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_lists_flags() {
    let o = run(&["--help"]);
    assert!(o.status.success());
    let out = stdout(&o);
    for flag in ["--level", "--window-bits", "--block-size", "--threads", "--recursive", "--bytewise", "--verify"] {
        assert!(out.contains(flag), "help is missing {flag}");
    }
}

// ── 3. Errors and exit codes ─────────────────────────────────────────────────

#[test]
fn test_cli_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does_not_exist.bin");
    let o = run(&[path_str(&missing)]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stderr(&o).contains("does_not_exist.bin"));
}

#[test]
fn test_cli_missing_file_does_not_stop_others() {
    let (dir, input) = make_temp_input();
    let missing = dir.path().join("gone.bin");
    let o = run(&[path_str(&missing), path_str(&input)]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stdout(&o).contains("input.txt: "));
}

#[test]
fn test_cli_bad_level_is_usage_error() {
    let (_dir, input) = make_temp_input();
    let o = run(&["-l", "12", path_str(&input)]);
    assert_eq!(o.status.code(), Some(1));
    assert!(!stderr(&o).is_empty());
}

#[test]
fn test_cli_small_block_size_fails() {
    let (_dir, input) = make_temp_input();
    let o = run(&["-B", "1K", path_str(&input)]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stderr(&o).contains("block size 1024"));
}

#[test]
fn test_cli_no_arguments_fails() {
    let o = run(&[]);
    assert_eq!(o.status.code(), Some(1));
}

// ── 4. Directories ───────────────────────────────────────────────────────────

#[test]
fn test_cli_directory_needs_recursive() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("a.txt"), "alpha alpha alpha alpha").unwrap();
    fs::write(dir.path().join("sub/b.txt"), "beta beta beta beta beta").unwrap();

    let o = run(&[path_str(dir.path())]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stderr(&o).contains("-r"));

    let o = run(&["-r", path_str(dir.path())]);
    assert!(o.status.success(), "stderr: {}", stderr(&o));
    let out = stdout(&o);
    let a = out.find("a.txt: ").expect("a.txt reported");
    let b = out.find("b.txt: ").expect("b.txt reported");
    assert!(a < b, "files reported in walk order");
    assert!(stderr(&o).contains("2 files"));
}

#[test]
fn test_cli_empty_directory_fails() {
    let dir = TempDir::new().unwrap();
    let o = run(&["-r", path_str(dir.path())]);
    assert_eq!(o.status.code(), Some(1));
    assert!(stderr(&o).contains("no input files"));
}

// ── 5. Determinism ───────────────────────────────────────────────────────────

#[test]
fn test_cli_fingerprint_ignores_threads_and_comparator() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("big.txt");
    let text: String = (0..20_000).map(|i| format!("line {} of {}\n", i % 97, i % 13)).collect();
    fs::write(&input, text).unwrap();

    let base = run(&["-B", "64K", "-T", "1", path_str(&input)]);
    assert!(base.status.success());
    let expected = fingerprint(&base);
    for extra in [&["-T", "4"][..], &["--bytewise"][..], &["-T", "3", "--bytewise"][..]] {
        let mut args = vec!["-B", "64K"];
        args.extend_from_slice(extra);
        args.push(path_str(&input));
        let o = run(&args);
        assert!(o.status.success());
        assert_eq!(fingerprint(&o), expected, "{extra:?}");
    }
}

#[test]
fn test_cli_level_changes_fingerprint() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("defer.txt");
    fs::write(&input, DEFER).unwrap();
    let fast = run(&["-l", "1", path_str(&input)]);
    let best = run(&["-l", "9", path_str(&input)]);
    assert_ne!(fingerprint(&fast), fingerprint(&best));
}

// ── 6. Environment ───────────────────────────────────────────────────────────

#[test]
fn test_cli_env_level_is_used() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("defer.txt");
    fs::write(&input, DEFER).unwrap();
    let flag = run(&["-l", "1", path_str(&input)]);
    let env = Command::new(lzmatch_bin())
        .arg(path_str(&input))
        .env("LZMATCH_CLEVEL", "1")
        .output()
        .unwrap();
    assert!(env.status.success());
    assert_eq!(fingerprint(&env), fingerprint(&flag));
}

#[test]
fn test_cli_bad_env_level_is_ignored() {
    let (_dir, input) = make_temp_input();
    let o = Command::new(lzmatch_bin())
        .arg(path_str(&input))
        .env("LZMATCH_CLEVEL", "fast")
        .output()
        .unwrap();
    assert!(o.status.success());
    assert!(stderr(&o).contains("LZMATCH_CLEVEL"));
}

// ── 7. Verbosity ─────────────────────────────────────────────────────────────

#[test]
fn test_cli_quiet_suppresses_report() {
    let (_dir, input) = make_temp_input();
    let o = run(&["-qq", path_str(&input)]);
    assert!(o.status.success());
    assert!(stdout(&o).is_empty());
    assert!(stderr(&o).is_empty());
}

#[test]
fn test_cli_verbose_adds_details() {
    let (_dir, input) = make_temp_input();
    let o = run(&["-v", path_str(&input)]);
    assert!(o.status.success());
    let err = stderr(&o);
    assert!(err.contains("*** lzmatch v"), "{err}");
    assert!(err.contains(" searches, "), "{err}");
}

#[test]
fn test_cli_very_verbose_lists_blocks() {
    let (_dir, input) = make_temp_input();
    let o = run(&["-vv", "-B", "4K", path_str(&input)]);
    assert!(o.status.success());
    assert!(stderr(&o).contains("block     0:"));
}
