//! Text helpers for command output

/// Split command output on newlines, dropping empty elements
///
/// Order is preserved; only elements equal to the empty string are dropped,
/// whitespace-only lines are kept.
pub fn non_empty_lines(output: &str) -> Vec<String> {
    output
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_empty_elements() {
        assert_eq!(non_empty_lines("a\n\nb\n"), ["a", "b"]);
    }

    #[test]
    fn test_no_newline_is_single_element() {
        assert_eq!(non_empty_lines("pod/controller-0"), ["pod/controller-0"]);
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert!(non_empty_lines("").is_empty());
    }

    #[test]
    fn test_whitespace_lines_are_kept() {
        assert_eq!(non_empty_lines(" \na\n"), [" ", "a"]);
    }
}
