//! Line-comment toggling.
//!
//! Driven by the comment token from the language metadata. Toggling is
//! idempotent in pairs: commenting then uncommenting restores the original
//! line byte-for-byte.

/// Whether `line` is commented with `token` (leading whitespace allowed).
pub fn is_commented(line: &str, token: &str) -> bool {
    line.trim_start().starts_with(token)
}

/// Toggle a line comment on a single line.
///
/// Uncommented lines gain a `"<token> "` prefix. Commented lines lose the
/// token and one following space if present; indentation before the token is
/// preserved.
pub fn toggle_line_comment(line: &str, token: &str) -> String {
    if is_commented(line, token) {
        uncomment_line(line, token)
    } else {
        format!("{token} {line}")
    }
}

fn uncomment_line(line: &str, token: &str) -> String {
    let indent_len = line.len() - line.trim_start().len();
    let (indent, rest) = line.split_at(indent_len);
    let rest = rest.strip_prefix(token).unwrap_or(rest);
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    format!("{indent}{rest}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_prefix() {
        assert_eq!(toggle_line_comment("puts 1", "#"), "# puts 1");
    }

    #[test]
    fn test_toggle_roundtrip() {
        let original = "x = compute(a, b)";
        let once = toggle_line_comment(original, "#");
        assert_eq!(once, "# x = compute(a, b)");
        assert_eq!(toggle_line_comment(&once, "#"), original);
    }

    #[test]
    fn test_indented_line() {
        let original = "  x = 1";
        let once = toggle_line_comment(original, "#");
        // a commented line stays commented-looking
        assert!(is_commented(&once, "#"));
        assert_eq!(toggle_line_comment(&once, "#"), original);
    }

    #[test]
    fn test_uncomment_without_space() {
        assert_eq!(toggle_line_comment("#x = 1", "#"), "x = 1");
    }

    #[test]
    fn test_empty_line() {
        let once = toggle_line_comment("", "#");
        assert_eq!(once, "# ");
        assert_eq!(toggle_line_comment(&once, "#"), "");
    }
}
