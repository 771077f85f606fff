// crates/snippet_scanner/src/mode.rs

use scan_markers::{DOCS_BEGIN_MARKER, DOCS_MODE_ARG};

/// How a file is scanned for cases, and how the cases are written back out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Raw string literal bodies in sources; `.sol` files are taken whole.
    #[default]
    SourceLiteral,
    /// Indented blocks following `begin_marker` in documentation.
    DocBlock { begin_marker: String },
}

impl ScanMode {
    /// Documentation mode with the standard Solidity code-block directive.
    pub fn docs() -> Self {
        ScanMode::DocBlock {
            begin_marker: DOCS_BEGIN_MARKER.to_string(),
        }
    }

    /// Maps the optional second command-line argument to a mode.
    /// Only the exact value `docs` selects documentation mode.
    pub fn from_mode_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(DOCS_MODE_ARG) => ScanMode::docs(),
            _ => ScanMode::SourceLiteral,
        }
    }

    pub fn is_docs(&self) -> bool {
        matches!(self, ScanMode::DocBlock { .. })
    }
}
