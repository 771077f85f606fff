// crates/snippet_scanner/src/lib.rs

//! Line scanners that pull embedded test cases out of source and
//! documentation files.
//!
//! Two scanners exist, selected through [`ScanMode`]:
//!   - raw string literals (`R"delim(` ... `)delim";`) in C++ style sources,
//!   - indented blocks that follow a `.. code-block:: solidity` directive in
//!     reStructuredText documentation.
//!
//! Consumers normally go through [`extract_cases`], which also handles the
//! `.sol` shortcut (the whole file is one case) in source‑literal mode.

pub mod extractor;
pub mod mode;
pub mod utils;

pub use extractor::case_extractor::{
    extract_cases, extractor_for, CaseExtractor, DocBlockExtractor, RawLiteralExtractor,
    WholeFileExtractor,
};
pub use extractor::doc_block::{extract_doc_block_cases, is_compilable};
pub use extractor::raw_literal::extract_raw_literal_cases;
pub use mode::ScanMode;
pub use utils::text_utils::{decode_lossy, read_lossy, split_lines};
