// crates/isolate_tests/src/config.rs

use clap::Parser;
use snippet_scanner::ScanMode;
use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line surface. `path` is optional here so that a missing path can
/// be answered with the plain usage line and exit code 1.
#[derive(Debug, Parser)]
#[command(
    name = "isolate_tests",
    version,
    about = "Writes every embedded test case of C++ sources or RST docs into its own .sol file"
)]
pub struct Cli {
    /// File or folder to extract code from.
    pub path: Option<PathBuf>,

    /// Pass `docs` to extract `.. code-block:: solidity` samples instead of raw string literals.
    pub mode: Option<String>,

    /// Directory receiving the extracted files.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose logging.
    #[arg(long)]
    pub verbose: bool,

    /// Further arguments, as left by a shell glob like `test/libsolidity/*`; ignored.
    #[arg(hide = true, num_args = 0..)]
    pub rest: Vec<OsString>,
}

/// Centralized runtime configuration composed from the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractConfig {
    pub root: PathBuf,
    pub mode: ScanMode,
    pub output_dir: PathBuf,
    pub verbose: bool,
}

impl Cli {
    /// `None` when no path was given.
    pub fn into_config(self) -> Option<ExtractConfig> {
        let root = self.path?;
        Some(ExtractConfig {
            root,
            mode: ScanMode::from_mode_arg(self.mode.as_deref()),
            output_dir: self.output_dir,
            verbose: self.verbose,
        })
    }
}
