// crates/write_cases/src/lib.rs

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use scan_markers::{OUTPUT_PREFIX, SOL_EXTENSION};
use sha2::{Digest, Sha256};
use snippet_scanner::ScanMode;
use std::fs;
use std::path::{Path, PathBuf};

static LEADING_INDENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^ {4}").expect("indent pattern is valid"));

/// Turns a source basename into the suffix of an output file name:
/// `.`, `-` and spaces become `_`, and the result is lowercased.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .replace(|c: char| matches!(c, '.' | '-' | ' '), "_")
        .to_lowercase()
}

/// Removes one level (exactly four spaces) of indentation from every line.
pub fn dedent_once(case: &str) -> String {
    LEADING_INDENT.replace_all(case, "").into_owned()
}

/// Lowercase hex SHA-256 of the case text.
pub fn content_digest(case: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(case.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// `test_<digest>_<sanitized name>.sol`. The digest is always taken over
/// the case as extracted, before any dedent.
pub fn output_file_name(case: &str, sanitized_name: &str) -> String {
    format!(
        "{}{}_{}{}",
        OUTPUT_PREFIX,
        content_digest(case),
        sanitized_name,
        SOL_EXTENSION
    )
}

/// Writes every case of `original_file_name` into `output_dir`, one file per
/// case, and returns the written paths in case order.
///
/// Documentation cases lose one indentation level on the way out; source
/// cases are written verbatim. Existing files of the same name are
/// overwritten.
pub fn write_cases(
    original_file_name: &str,
    cases: &[String],
    mode: &ScanMode,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let sanitized_name = sanitize_file_name(original_file_name);
    let mut written = Vec::with_capacity(cases.len());

    for case in cases {
        let body = if mode.is_docs() {
            dedent_once(case)
        } else {
            case.clone()
        };
        let out_path = output_dir.join(output_file_name(case, &sanitized_name));
        fs::write(&out_path, body)
            .with_context(|| format!("Failed to write {}", out_path.display()))?;
        log::debug!("Wrote {}", out_path.display());
        written.push(out_path);
    }

    Ok(written)
}
