//! Display width utilities for thermal printer text
//!
//! Receipt printers lay text out on a fixed grid of cells. Chinese
//! characters take two cells, ASCII takes one. This module provides:
//! - Classifying a character as narrow or wide
//! - Measuring the display length of a string
//! - Building space padding
//! - Rendering text as hex byte tokens for command strings
//!
//! Classification is a plain ASCII cutoff: every code point above 127 counts
//! as wide. Full-width Latin, emoji and narrow non-Latin scripts are all
//! reported as wide, and combining sequences are counted per code point.
//! Printers already deployed with this layout depend on the cutoff, so it is
//! not replaced with East Asian Width tables.

use encoding_rs::Encoding;

/// Number of printer cells a character occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharWidth {
    /// One cell (ASCII)
    Narrow,
    /// Two cells (anything above ASCII)
    Wide,
}

impl CharWidth {
    /// Cell count for this width
    pub fn cells(self) -> usize {
        match self {
            CharWidth::Narrow => 1,
            CharWidth::Wide => 2,
        }
    }
}

/// Classify a character by its code point
pub fn char_width(c: char) -> CharWidth {
    if (c as u32) > 127 {
        CharWidth::Wide
    } else {
        CharWidth::Narrow
    }
}

/// Whether a character takes two cells
pub fn is_double_width(c: char) -> bool {
    char_width(c) == CharWidth::Wide
}

/// Cell count of a single character (2 for wide, 1 for narrow)
pub fn display_width(c: char) -> usize {
    char_width(c).cells()
}

/// Total cell count of a string
pub fn display_length(text: &str) -> usize {
    text.chars().map(display_width).sum()
}

/// A string of `n` spaces
///
/// Non-positive counts give an empty string, so callers can pass the raw
/// result of a width subtraction.
pub fn spaces(n: isize) -> String {
    if n <= 0 {
        return String::new();
    }
    " ".repeat(n as usize)
}

/// Render the UTF-8 bytes of `text` as space separated lowercase hex
///
/// `"AB"` becomes `"41 42"`.
pub fn to_hex_bytes(text: &str) -> String {
    hex_tokens(text.as_bytes())
}

/// Render `text` as hex after encoding it with `encoding`
///
/// Useful for printers that expect GBK payloads instead of UTF-8.
pub fn to_hex_bytes_encoded(text: &str, encoding: &'static Encoding) -> String {
    let (bytes, _, _) = encoding.encode(text);
    hex_tokens(&bytes)
}

fn hex_tokens(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{:02x}", b));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_width() {
        assert_eq!(char_width('a'), CharWidth::Narrow);
        assert_eq!(char_width('\u{7f}'), CharWidth::Narrow);
        assert_eq!(char_width('\u{80}'), CharWidth::Wide);
        assert_eq!(char_width('中'), CharWidth::Wide);
        // Known limitation: accented Latin is counted as wide
        assert!(is_double_width('é'));
    }

    #[test]
    fn test_display_length() {
        assert_eq!(display_length(""), 0);
        assert_eq!(display_length("hello"), 5);
        assert_eq!(display_length("你好"), 4);
        assert_eq!(display_length("AB中文CD"), 8);
    }

    #[test]
    fn test_display_length_ascii_matches_len() {
        for s in ["", " ", "Total:", "0123456789 !@#$%^&*()", "\t\n"] {
            assert_eq!(display_length(s), s.len());
        }
    }

    #[test]
    fn test_display_length_non_ascii_doubles() {
        for s in ["中", "合计金额", "ÄÖÜ", "🙂🙂"] {
            assert_eq!(display_length(s), 2 * s.chars().count());
        }
    }

    #[test]
    fn test_spaces() {
        assert_eq!(spaces(-5), "");
        assert_eq!(spaces(0), "");
        assert_eq!(spaces(1), " ");
        assert_eq!(spaces(6), "      ");
    }

    #[test]
    fn test_to_hex_bytes() {
        assert_eq!(to_hex_bytes(""), "");
        assert_eq!(to_hex_bytes("AB"), "41 42");
        assert_eq!(to_hex_bytes("\n"), "0a");
        assert_eq!(to_hex_bytes("中"), "e4 b8 ad");
    }

    #[test]
    fn test_to_hex_bytes_gbk() {
        assert_eq!(to_hex_bytes_encoded("中", encoding_rs::GBK), "d6 d0");
        assert_eq!(to_hex_bytes_encoded("A中", encoding_rs::GBK), "41 d6 d0");
    }
}
