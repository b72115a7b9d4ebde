//! Input path expansion.
//!
//! Given the paths named on the command line, [`expand_inputs`] returns a flat
//! list of files to scan. Directories are walked with [`walkdir`] when
//! recursion is enabled and rejected otherwise.
//!
//! Symlinks are not followed inside a walk: `walkdir` runs with its default
//! `follow_links(false)`, so symlink entries are skipped rather than resolved.
//! A symlink named directly on the command line is passed through.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

fn walk_error(e: walkdir::Error) -> io::Error {
    match e.io_error() {
        Some(inner) => io::Error::new(inner.kind(), e.to_string()),
        None => io::Error::other(e.to_string()),
    }
}

/// Files under `dir`, in file-name order at every level.
pub fn walk_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(walk_error)?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Expand `inputs` into the list of files to scan.
///
/// - Non-directory inputs are forwarded unchanged; a missing file is reported
///   later, when it is opened.
/// - Directories are walked when `recursive` is set, and are an
///   `InvalidInput` error otherwise.
pub fn expand_inputs<P: AsRef<Path>>(inputs: &[P], recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if input.is_dir() {
            if !recursive {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{}: is a directory (use -r to scan it)", input.display()),
                ));
            }
            result.extend(walk_dir(input)?);
        } else {
            result.push(input.to_path_buf());
        }
    }
    Ok(result)
}
