//! Model output parsing.

/// Splits raw model output into at most `max` suggestions.
///
/// One non-empty trimmed line is one suggestion.
pub fn parse_suggestions(raw: &str, max: usize) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_lines_and_trims() {
        let raw = "\n  first reply  \n\n\tsecond reply\n   \nthird reply\n";
        assert_eq!(
            parse_suggestions(raw, 3),
            vec!["first reply", "second reply", "third reply"]
        );
    }

    #[test]
    fn truncates_to_requested_count() {
        assert_eq!(parse_suggestions("a\nb\nc\nd", 2), vec!["a", "b"]);
    }

    #[test]
    fn handles_crlf_output() {
        assert_eq!(parse_suggestions("a\r\nb\r\n", 5), vec!["a", "b"]);
    }

    #[test]
    fn empty_output_yields_nothing() {
        assert!(parse_suggestions("   \n\n", 3).is_empty());
    }
}
