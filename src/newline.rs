//! Line-ending convention detection.

use std::cmp::Ordering;

use serde::Serialize;

/// Line-ending family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewlineKind {
    Lf,
    Crlf,
}

impl NewlineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NewlineKind::Lf => "lf",
            NewlineKind::Crlf => "crlf",
        }
    }
}

/// A detected line-ending convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NewlineStyle {
    #[serde(rename = "type")]
    pub kind: NewlineKind,
    pub newline: &'static str,
}

/// Detect whether `text` ends its lines with `\n` or `\r\n`.
///
/// The majority ending wins. Returns `None` when the text contains no line
/// endings at all, or uses both styles equally often.
pub fn detect_newline(text: &str) -> Option<NewlineStyle> {
    let crlf = text.matches("\r\n").count();
    let lf = text.matches('\n').count() - crlf;

    match crlf.cmp(&lf) {
        Ordering::Greater => Some(NewlineStyle {
            kind: NewlineKind::Crlf,
            newline: "\r\n",
        }),
        Ordering::Less => Some(NewlineStyle {
            kind: NewlineKind::Lf,
            newline: "\n",
        }),
        Ordering::Equal => None,
    }
}
