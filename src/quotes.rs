//! String-quote convention detection.

use std::cmp::Ordering;

use serde::Serialize;

/// Quote family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteKind {
    Single,
    Double,
}

impl QuoteKind {
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteKind::Single => "single",
            QuoteKind::Double => "double",
        }
    }
}

/// A detected quote convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct QuoteStyle {
    #[serde(rename = "type")]
    pub kind: QuoteKind,
    pub quotes: char,
}

/// Detect whether `text` prefers single or double quotes.
///
/// Counts quote characters that are not escaped; the majority wins, and a
/// tie detects nothing.
pub fn detect_quotes(text: &str) -> Option<QuoteStyle> {
    let single = count_unescaped(text, b'\'');
    let double = count_unescaped(text, b'"');

    match single.cmp(&double) {
        Ordering::Greater => Some(QuoteStyle {
            kind: QuoteKind::Single,
            quotes: '\'',
        }),
        Ordering::Less => Some(QuoteStyle {
            kind: QuoteKind::Double,
            quotes: '"',
        }),
        Ordering::Equal => None,
    }
}

/// Occurrences of `quote` whose immediately preceding byte is not a
/// backslash. The look-back is exactly one byte deep, so the quote in `\\'`
/// counts as escaped.
fn count_unescaped(text: &str, quote: u8) -> usize {
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == quote && (i == 0 || bytes[i - 1] != b'\\'))
        .count()
}
