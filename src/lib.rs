//! # stylesniff - Source Style Convention Detector
//!
//! stylesniff infers the formatting conventions already present in a source
//! file: indentation style and width, newline convention, statement
//! terminator (semicolon) usage, and string quote style. Formatters and
//! linters use it to match a file's existing style before rewriting it.
//!
//! Detection is purely textual - no language grammar is parsed, and the
//! input is never modified. Every detector is total over any string and
//! reports "no convention found" as `None` rather than an error.
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```rust
//! use stylesniff::{detect_indent, detect_newline, detect_quotes, detect_semicolon};
//!
//! let source = "fn main() {\n    let s = \"hi\";\n    println!(\"{s}\");\n}\n";
//!
//! let indent = detect_indent(source).unwrap();
//! assert_eq!(indent.indent, "    ");
//!
//! assert_eq!(detect_newline(source).unwrap().newline, "\n");
//! assert_eq!(detect_semicolon(source), Some(true));
//! assert_eq!(detect_quotes(source).unwrap().quotes, '"');
//! ```
//!
//! ### As a CLI Tool
//!
//! The crate also builds a command-line tool that reports the detected
//! conventions per file, in plain text or JSON. See the `main` module for
//! CLI usage details.
//!
//! ## Modules
//!
//! - [`indent`] - indentation detection, the interesting part: a per-line
//!   state machine over indent deltas feeding a frequency-table vote
//! - [`newline`], [`semicolon`], [`quotes`] - single-pass majority votes
//! - [`comments`] - comment stripping shared by the line-oriented detectors
//!
//! ## Limitations
//!
//! - Comment handling covers `//` line comments and `/* */` block spans only
//! - Quote escape handling looks back exactly one character
//! - The whole text is analyzed in memory; there is no streaming mode

/// Indentation convention detection
pub mod indent;

/// Line-ending convention detection
pub mod newline;

/// Statement-terminator convention detection
pub mod semicolon;

/// String-quote convention detection
pub mod quotes;

/// Comment stripping and line helpers
pub mod comments;

pub use crate::comments::{non_empty_lines, strip_comments};
pub use crate::indent::{IndentKind, IndentStats, IndentStyle, detect_indent};
pub use crate::newline::{NewlineKind, NewlineStyle, detect_newline};
pub use crate::quotes::{QuoteKind, QuoteStyle, detect_quotes};
pub use crate::semicolon::detect_semicolon;
