// crates/find_candidate_files/src/lib.rs

use anyhow::{bail, Result};
use scan_markers::{SKIPPED_DIRS, SKIPPED_FILE};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A file to extract cases from: its basename plus the full path to read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateFile {
    pub file_name: String,
    pub path: PathBuf,
}

/// Lazily lists the files under `root` that should be scanned.
///
/// - A regular file (or a symlink to one) yields just that file.
/// - A directory is walked recursively in file name order. Subdirectories
///   named `_build` or `compilationTests` are pruned, and any file named
///   `invalid_utf8_sequence.sol` is skipped. Directory symlinks are not
///   followed.
/// - Anything else is an error.
pub fn discover(root: &Path) -> Result<Box<dyn Iterator<Item = CandidateFile>>> {
    if root.is_file() {
        let file_name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        return Ok(Box::new(std::iter::once(CandidateFile {
            file_name,
            path: root.to_path_buf(),
        })));
    }
    if !root.is_dir() {
        bail!("'{}' is neither a file nor a directory.", root.display());
    }

    let files = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped_dir(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|entry| entry.path().is_file())
        .filter(|entry| entry.file_name() != SKIPPED_FILE)
        .map(|entry| CandidateFile {
            file_name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.into_path(),
        });
    Ok(Box::new(files))
}

/// The walk root itself is never pruned, only directories below it.
fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| SKIPPED_DIRS.contains(&name))
            .unwrap_or(false)
}
