//! Shared literals and character splitting.

use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Zero-width compensation literal: a caret position with no visible glyph.
pub const ZERO: &str = "\u{200B}";

/// Line break as it appears in nested (compressed) values.
pub const LINE_BREAK: &str = "\n";

/// Whether `value` starts a new line (a `ZERO` or `\n` in first position).
pub fn starts_with_line_break(value: &str) -> bool {
    static START_LINE_BREAK: OnceLock<Regex> = OnceLock::new();
    START_LINE_BREAK
        .get_or_init(|| Regex::new("^[\u{200B}\n]").expect("Invalid line start regex"))
        .is_match(value)
}

/// Strips a single leading `ZERO`/`\n`.
pub fn strip_line_break_prefix(value: &str) -> &str {
    if starts_with_line_break(value) {
        let mut chars = value.chars();
        chars.next();
        chars.as_str()
    } else {
        value
    }
}

/// Literal line breaks become the compensation literal.
pub fn normalize_line_break(value: &str) -> Option<&'static str> {
    match value {
        "\n" | "\r\n" => Some(ZERO),
        _ => None,
    }
}

/// Splits `text` into display units, one per extended grapheme cluster.
/// `\r\n` stays one unit.
pub fn split_text(text: &str) -> Vec<String> {
    text.graphemes(true).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc", vec!["a", "b", "c"])]
    #[case("", vec![])]
    #[case("a\r\nb", vec!["a", "\r\n", "b"])]
    #[case("e\u{0301}x", vec!["e\u{0301}", "x"])]
    #[case("😀a", vec!["😀", "a"])]
    #[case("👍🏽", vec!["👍🏽"])]
    #[case("👩\u{200D}💻!", vec!["👩\u{200D}💻", "!"])]
    #[case("🇺🇸x", vec!["🇺🇸", "x"])]
    #[case("\u{1100}\u{1161}\u{11A8}a", vec!["\u{1100}\u{1161}\u{11A8}", "a"])]
    fn split_text_units(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_text(input), expected);
    }

    #[rstest]
    #[case("\nabc", true)]
    #[case("\u{200B}", true)]
    #[case("a\n", false)]
    #[case("", false)]
    fn line_start_detection(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(starts_with_line_break(value), expected);
    }

    #[test]
    fn strip_prefix_removes_one_break() {
        assert_eq!(strip_line_break_prefix("\n\nA"), "\nA");
        assert_eq!(strip_line_break_prefix("A"), "A");
    }

    #[test]
    fn only_bare_line_breaks_normalize() {
        assert_eq!(normalize_line_break("\n"), Some(ZERO));
        assert_eq!(normalize_line_break("\r\n"), Some(ZERO));
        assert_eq!(normalize_line_break("a\n"), None);
    }
}
