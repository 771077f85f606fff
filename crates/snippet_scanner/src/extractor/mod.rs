// crates/snippet_scanner/src/extractor/mod.rs

pub mod case_extractor;
pub mod doc_block;
pub mod raw_literal;
