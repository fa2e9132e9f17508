//! Statement-terminator convention detection.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::comments::{non_empty_lines, strip_comments};

static ENDS_IN_SEMICOLON: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+;\s*$").unwrap());
static ENDS_IN_STRUCTURAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+[(),{}]\s*$").unwrap());

/// Detect whether `text` terminates its statements with semicolons.
///
/// Comments are stripped first, then every non-empty line votes by its
/// tail: semicolon-terminated, structural (`(` `)` `,` `{` `}` — these lines
/// vote for neither side), or plain. `Some(true)` when semicolon lines
/// strictly outnumber plain lines, `Some(false)` when strictly fewer,
/// `None` on a tie or when nothing is left after stripping.
pub fn detect_semicolon(text: &str) -> Option<bool> {
    let stripped = strip_comments(text);
    if stripped.is_empty() {
        return None;
    }

    let mut semicolon = 0usize;
    let mut plain = 0usize;
    for line in non_empty_lines(&stripped) {
        if ENDS_IN_SEMICOLON.is_match(line) {
            semicolon += 1;
        } else if !ENDS_IN_STRUCTURAL.is_match(line) {
            plain += 1;
        }
    }

    match semicolon.cmp(&plain) {
        Ordering::Greater => Some(true),
        Ordering::Less => Some(false),
        Ordering::Equal => None,
    }
}
