// crates/isolate_tests/src/lib.rs

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use find_candidate_files::{discover, CandidateFile};
use snippet_scanner::extract_cases;
use write_cases::write_cases;

pub mod config;
pub mod logging;

pub use config::{Cli, ExtractConfig};

/// Totals of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub cases_written: usize,
}

/// Extracts the cases of one file and writes them to the output directory.
pub fn extract_and_write(candidate: &CandidateFile, config: &ExtractConfig) -> Result<Vec<PathBuf>> {
    let cases = extract_cases(&config.mode, &candidate.file_name, &candidate.path)?;
    write_cases(&candidate.file_name, &cases, &config.mode, &config.output_dir)
        .with_context(|| format!("Failed to write cases of {}", candidate.path.display()))
}

/// Walks `config.root` and isolates every case found, one file at a time.
///
/// The first I/O failure aborts the run; files written up to that point
/// stay on disk.
pub fn run(config: &ExtractConfig) -> Result<RunSummary> {
    if !config.output_dir.is_dir() {
        bail!(
            "Output directory '{}' does not exist.",
            config.output_dir.display()
        );
    }

    log::debug!(
        "Scanning {} in {:?} mode",
        config.root.display(),
        config.mode
    );

    let mut summary = RunSummary::default();
    for candidate in discover(&config.root)? {
        let written = extract_and_write(&candidate, config)?;
        summary.files_scanned += 1;
        summary.cases_written += written.len();
    }

    log::debug!(
        "{} file(s) scanned, {} case(s) written",
        summary.files_scanned,
        summary.cases_written
    );
    Ok(summary)
}
