// crates/scan_markers/src/lib.rs

//! Marker strings and fixed names shared by every step of the extraction
//! tool‑chain.

/// Line prefix (compared case‑insensitively) that opens an indented
/// documentation code sample.
pub const DOCS_BEGIN_MARKER: &str = ".. code-block:: solidity";

/// Sphinx directive line that is dropped from documentation samples.
pub const FORCE_DIRECTIVE: &str = "    :force:";

/// Indentation that marks a line as belonging to a documentation block.
pub const DOC_INDENT: &str = "    ";

/// Directory names whose whole subtree is never visited.
pub const SKIPPED_DIRS: &[&str] = &["_build", "compilationTests"];

/// Fixture with a deliberately broken encoding.
pub const SKIPPED_FILE: &str = "invalid_utf8_sequence.sol";

/// Extension of files that are taken whole in source‑literal mode,
/// and of every written output file.
pub const SOL_EXTENSION: &str = ".sol";

/// Prefix of every written output file.
pub const OUTPUT_PREFIX: &str = "test_";

/// Value of the second positional argument that selects documentation mode.
pub const DOCS_MODE_ARG: &str = "docs";
