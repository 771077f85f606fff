// crates/snippet_scanner/src/extractor/case_extractor.rs

use anyhow::Result;
use scan_markers::SOL_EXTENSION;
use std::path::Path;

use crate::extractor::doc_block::extract_doc_block_cases;
use crate::extractor::raw_literal::extract_raw_literal_cases;
use crate::mode::ScanMode;
use crate::utils::text_utils::read_lossy;

/// Trait that abstracts pulling test cases out of one file.
pub trait CaseExtractor {
    /// Reads the file at `path` and returns its cases in file order.
    fn extract(&self, path: &Path) -> Result<Vec<String>>;
}

/// Raw string literal bodies (`R"delim(` ... `)delim";`).
pub struct RawLiteralExtractor;

impl CaseExtractor for RawLiteralExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>> {
        let content = read_lossy(path)?;
        Ok(extract_raw_literal_cases(&content))
    }
}

/// The complete file is a single case.
pub struct WholeFileExtractor;

impl CaseExtractor for WholeFileExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>> {
        Ok(vec![read_lossy(path)?])
    }
}

/// Compilable indented blocks after a documentation directive.
pub struct DocBlockExtractor {
    pub begin_marker: String,
}

impl CaseExtractor for DocBlockExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<String>> {
        let content = read_lossy(path)?;
        Ok(extract_doc_block_cases(&content, &self.begin_marker))
    }
}

/// Picks the extractor for a file. In source-literal mode `.sol` files are
/// taken whole; everything else is scanned for raw string literals.
pub fn extractor_for(mode: &ScanMode, file_name: &str) -> Box<dyn CaseExtractor> {
    match mode {
        ScanMode::DocBlock { begin_marker } => Box::new(DocBlockExtractor {
            begin_marker: begin_marker.clone(),
        }),
        ScanMode::SourceLiteral if file_name.ends_with(SOL_EXTENSION) => {
            Box::new(WholeFileExtractor)
        }
        ScanMode::SourceLiteral => Box::new(RawLiteralExtractor),
    }
}

/// Public API: extracts the cases of the file at `path`, whose basename is
/// `file_name`, according to `mode`.
pub fn extract_cases<P: AsRef<Path>>(mode: &ScanMode, file_name: &str, path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let cases = extractor_for(mode, file_name).extract(path)?;
    log::debug!("{}: {} case(s)", path.display(), cases.len());
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::fs;
    use tempfile::tempdir;

    /// Extractor that always fails, standing in for an unreadable file.
    struct FailingExtractor;

    impl CaseExtractor for FailingExtractor {
        fn extract(&self, _path: &Path) -> Result<Vec<String>> {
            Err(anyhow!("Simulated extraction failure"))
        }
    }

    #[test]
    fn test_failing_extractor() {
        let dir = tempdir().unwrap();
        let extractor: Box<dyn CaseExtractor> = Box::new(FailingExtractor);
        assert!(extractor.extract(dir.path()).is_err());
    }

    #[test]
    fn test_sol_file_is_one_case_in_source_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Token.sol");
        let content = "pragma solidity ^0.8.0;\ncontract T {\n    R\"(\n}\n";
        fs::write(&path, content).unwrap();

        let cases = extract_cases(&ScanMode::SourceLiteral, "Token.sol", &path).unwrap();
        assert_eq!(cases, vec![content.to_string()]);
    }

    #[test]
    fn test_sol_file_is_scanned_in_docs_mode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Token.sol");
        fs::write(&path, "pragma solidity ^0.8.0;\ncontract T {}\n").unwrap();

        let cases = extract_cases(&ScanMode::docs(), "Token.sol", &path).unwrap();
        assert!(cases.is_empty());
    }

    #[test]
    fn test_other_files_are_scanned_for_literals() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("SolidityParser.cpp");
        fs::write(&path, "auto s = R\"(\ncontract C {}\n)\";\n").unwrap();

        let cases = extract_cases(&ScanMode::SourceLiteral, "SolidityParser.cpp", &path).unwrap();
        assert_eq!(cases, vec!["contract C {}\n".to_string()]);
    }

    #[test]
    fn test_missing_file_propagates_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.cpp");
        let result = extract_cases(&ScanMode::SourceLiteral, "gone.cpp", &path);
        assert!(result.is_err());
    }
}
