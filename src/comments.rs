//! Comment stripping and line helpers shared by the line-oriented detectors.

use once_cell::sync::Lazy;
use regex::Regex;

static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//[^\n]*\n?").unwrap());
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

/// Remove `//` line comments and `/* ... */` block spans from `text`.
///
/// A line comment is removed together with its newline, so a trailing
/// comment splices its line with the following one. Block spans may cross
/// lines; the match is non-greedy. No tokenization happens first, so comment
/// markers inside string literals are stripped like any other.
pub fn strip_comments(text: &str) -> String {
    let without_line = LINE_COMMENT.replace_all(text, "");
    BLOCK_COMMENT.replace_all(&without_line, "").into_owned()
}

/// The lines of `text` that are not zero-length. Whitespace-only lines are
/// kept.
pub fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').filter(|line| !line.is_empty())
}
