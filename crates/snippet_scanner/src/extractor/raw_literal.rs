// crates/snippet_scanner/src/extractor/raw_literal.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::text_utils::split_lines;

/// Opening line of a raw string literal: `R"` + delimiter + `(` at the very
/// end of the (trimmed) line.
static RAW_LITERAL_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"R"([^(]*)\($"#).expect("raw literal pattern is valid"));

/// Per-file scan state. `closing` is `Some` while inside a literal and holds
/// the exact suffix (`)` + delimiter + `";`) that ends it.
#[derive(Default)]
struct RawLiteralScan {
    closing: Option<String>,
    cases: Vec<String>,
}

impl RawLiteralScan {
    fn feed(&mut self, line: &str) {
        let trimmed = line.trim();
        match &self.closing {
            Some(closing) => {
                if trimmed.ends_with(closing.as_str()) {
                    self.closing = None;
                } else if let Some(case) = self.cases.last_mut() {
                    case.push_str(line);
                    case.push('\n');
                }
            }
            None => {
                if let Some(caps) = RAW_LITERAL_OPEN.captures(trimmed) {
                    self.closing = Some(format!("){}\";", &caps[1]));
                    self.cases.push(String::new());
                }
            }
        }
    }
}

/// Collects the body of every raw string literal in `content`, in order.
///
/// Body lines are kept verbatim (untrimmed). The opening and closing lines
/// are not part of the body. A literal that is still open at the end of the
/// input is returned as far as it got.
pub fn extract_raw_literal_cases(content: &str) -> Vec<String> {
    let mut scan = RawLiteralScan::default();
    for line in split_lines(content) {
        scan.feed(line);
    }
    scan.cases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_delimiter_block() {
        let content = concat!(
            "BOOST_AUTO_TEST_CASE(simple)\n",
            "{\n",
            "  char const* text = R\"ABC(\n",
            "    contract C {\n",
            "    }\n",
            "  )ABC\";\n",
            "}\n",
        );
        let cases = extract_raw_literal_cases(content);
        assert_eq!(cases, vec!["    contract C {\n    }\n".to_string()]);
    }

    #[test]
    fn test_empty_delimiter_block() {
        let content = "x = R\"(\nline\n)\";\n";
        assert_eq!(extract_raw_literal_cases(content), vec!["line\n".to_string()]);
    }

    #[test]
    fn test_multiple_blocks_in_file_order() {
        let content = concat!(
            "a = R\"(\n",
            "first\n",
            ")\";\n",
            "b = R\"X(\n",
            "second\n",
            "more\n",
            ")X\";\n",
            "c = R\"(\n",
            "third\n",
            ")\";\n",
        );
        let cases = extract_raw_literal_cases(content);
        assert_eq!(
            cases,
            vec![
                "first\n".to_string(),
                "second\nmore\n".to_string(),
                "third\n".to_string(),
            ]
        );
    }

    #[test]
    fn test_closing_with_other_delimiter_does_not_end_block() {
        let content = "R\"A(\none\n)B\";\ntwo\n)A\";\n";
        assert_eq!(
            extract_raw_literal_cases(content),
            vec!["one\n)B\";\ntwo\n".to_string()]
        );
    }

    #[test]
    fn test_opening_must_end_the_line() {
        let content = "x = R\"(inline)\";\nnot captured\n";
        assert!(extract_raw_literal_cases(content).is_empty());
    }

    #[test]
    fn test_opening_tolerates_trailing_whitespace() {
        let content = "x = R\"(   \nbody\n   )\";   \n";
        assert_eq!(extract_raw_literal_cases(content), vec!["body\n".to_string()]);
    }

    #[test]
    fn test_unterminated_block_is_kept_truncated() {
        let content = "R\"(\nline one\nline two\n";
        assert_eq!(
            extract_raw_literal_cases(content),
            vec!["line one\nline two\n".to_string()]
        );
    }

    #[test]
    fn test_empty_block_yields_empty_case() {
        let content = "R\"(\n)\";\n";
        assert_eq!(extract_raw_literal_cases(content), vec![String::new()]);
    }

    #[test]
    fn test_crlf_lines_are_normalised() {
        let content = "R\"(\r\nbody\r\n)\";\r\n";
        assert_eq!(extract_raw_literal_cases(content), vec!["body\n".to_string()]);
    }

    #[test]
    fn test_no_literals() {
        assert!(extract_raw_literal_cases("int main() { return 0; }\n").is_empty());
    }
}
