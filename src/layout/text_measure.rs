//! Text Measurement
//!
//! Utilities for fitting text into a fixed number of terminal cells.
//!
//! Terminal text width depends on Unicode character widths:
//! - ASCII characters: 1 cell
//! - CJK characters: 2 cells (fullwidth)
//! - Zero-width characters: 0 cells
//!
//! Widths come from the `unicode-width` crate.

use unicode_width::UnicodeWidthStr;

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `text` so it occupies at most `max_width` cells.
///
/// Every kept prefix is measured as a whole string, so sequences wider than
/// the sum of their chars (an emoji plus variation selector) are cut before
/// the char that widens them. A wide character that would straddle the
/// limit is dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> &str {
    if string_width(text) <= max_width {
        return text;
    }
    let mut kept = "";
    for (idx, c) in text.char_indices() {
        let prefix = &text[..idx + c.len_utf8()];
        if string_width(prefix) > max_width {
            break;
        }
        kept = prefix;
    }
    kept
}

/// Left-align `text` in exactly `width` cells (truncate, then pad).
pub fn pad_to_width(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let mut out = String::with_capacity(width.max(text.len()));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(string_width(text))));
    out
}

/// Centre `text` in exactly `width` cells. Extra space goes to the right.
pub fn center_to_width(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let slack = width.saturating_sub(string_width(text));
    let left = slack / 2;
    let mut out = String::with_capacity(width.max(text.len()));
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', slack - left));
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width(""), 0);
    }

    #[test]
    fn test_string_width_cjk() {
        assert_eq!(string_width("用户名"), 6);
        assert_eq!(string_width("a中b"), 4);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("hello", 3), "hel");
        assert_eq!(truncate_to_width("hello", 10), "hello");
        // "中" needs 2 cells, only 1 left after "a"
        assert_eq!(truncate_to_width("a中", 2), "a");
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcd");
        assert_eq!(pad_to_width("中", 3), "中 ");
    }

    #[test]
    fn test_center() {
        assert_eq!(center_to_width("ab", 6), "  ab  ");
        assert_eq!(center_to_width("ab", 5), " ab  ");
        assert_eq!(center_to_width("[0,0]", 3), "[0,");
    }

    #[test]
    fn test_emoji_sequence_fits() {
        let text = "  abcdefg\u{2764}\u{FE0F}";
        assert!(string_width(text) > 10);

        let cut = truncate_to_width(text, 10);
        assert!(string_width(cut) <= 10);
        assert!(cut.starts_with("  abcdefg"));

        let padded = pad_to_width(text, 10);
        assert!(string_width(&padded) <= 10);
        let centred = center_to_width(text, 10);
        assert!(string_width(&centred) <= 10);
    }
}
