// crates/snippet_scanner/src/extractor/doc_block.rs

use once_cell::sync::Lazy;
use regex::Regex;
use scan_markers::{DOC_INDENT, FORCE_DIRECTIVE};

use crate::utils::text_utils::split_lines;

/// A block is worth keeping if some line, indented by exactly four
/// whitespace characters, opens with a top-level Solidity construct.
static COMPILABLE_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^\s{4}(// SPDX-License-Identifier:|pragma solidity|contract.*\{|library.*\{|interface.*\{)",
    )
    .expect("compilable code pattern is valid")
});

/// Returns true if the raw (still indented) block looks like compilable
/// Solidity rather than an indented prose fragment.
pub fn is_compilable(block: &str) -> bool {
    COMPILABLE_CODE.is_match(block)
}

/// Collects the indented blocks that follow `begin_marker` in `content`.
///
/// The marker is matched case-insensitively at the start of a line. A block
/// runs over empty lines and lines indented by four spaces, and ends at the
/// first other line. That terminating line is consumed by the block end and
/// is never tested as a new marker. The `:force:` directive is dropped.
///
/// Blocks failing [`is_compilable`] are discarded; the rest have their
/// leading newlines removed but keep their indentation.
pub fn extract_doc_block_cases(content: &str, begin_marker: &str) -> Vec<String> {
    let marker = begin_marker.to_lowercase();
    let mut inside_block = false;
    let mut blocks: Vec<String> = Vec::new();

    for line in split_lines(content) {
        if inside_block {
            if line.is_empty() || line.starts_with(DOC_INDENT) {
                if line != FORCE_DIRECTIVE {
                    if let Some(block) = blocks.last_mut() {
                        block.push_str(line);
                        block.push('\n');
                    }
                }
            } else {
                inside_block = false;
            }
        } else if line.to_lowercase().starts_with(&marker) {
            inside_block = true;
            blocks.push(String::new());
        }
    }

    let total = blocks.len();
    let cases: Vec<String> = blocks
        .into_iter()
        .filter(|block| is_compilable(block))
        .map(|block| block.trim_start_matches('\n').to_string())
        .collect();
    if cases.len() < total {
        log::debug!(
            "Discarded {} non-compilable documentation block(s)",
            total - cases.len()
        );
    }
    cases
}
