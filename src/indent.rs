//! Indentation convention detection
//!
//! The detector watches how the leading whitespace of consecutive lines
//! changes. Every line that enters a new indent level records a step (tab or
//! space, and how many characters the level moved by); every line that stays
//! on its level strengthens the step that got it there. The best supported
//! step wins and is reported together with its rendered indent string.
//!
//! Comments are not stripped first: indentation inside comments follows the
//! file's convention often enough to be signal rather than noise.

use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::Serialize;

/// The character family an indent is made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentKind {
    Tab,
    Space,
}

impl IndentKind {
    /// The string one level of this kind repeats.
    pub fn unit(self) -> &'static str {
        match self {
            IndentKind::Tab => "\t",
            IndentKind::Space => " ",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IndentKind::Tab => "tab",
            IndentKind::Space => "space",
        }
    }
}

/// Identity of one observed indent step: its character family and the number
/// of characters the level changed by. Never has a zero amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndentKey {
    pub kind: IndentKind,
    pub amount: usize,
}

/// Counters backing one [`IndentKey`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyStats {
    /// Lines that newly entered this indent step.
    pub use_count: u32,
    /// Lines that stayed on the level this step last produced. Only breaks
    /// ties between equally used steps.
    pub weight: u32,
}

/// Frequency table of observed indent steps, in first-seen order.
///
/// Insertion order is part of the contract: when two steps of the winning
/// family are equally supported, the one observed first wins.
pub type IndentStats = IndexMap<IndentKey, KeyStats>;

/// A detected indentation convention.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IndentStyle {
    #[serde(rename = "type")]
    pub kind: IndentKind,
    pub amount: usize,
    /// The indent string itself: the unit character repeated `amount` times.
    pub indent: String,
}

/// What a single line does to the running indentation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    /// The line enters an indent level different from the previous line's.
    NewLevel(IndentKey),
    /// The line repeats the previous line's indent level.
    RepeatLevel(IndentKey),
    /// An unindented line: the size baseline starts over.
    Reset,
    /// The line is invisible to the state machine.
    Skip,
}

#[derive(Debug)]
struct Classifier {
    ignore_single_space: bool,
    previous_size: usize,
    previous_kind: Option<IndentKind>,
    active_key: Option<IndentKey>,
}

impl Classifier {
    fn new(ignore_single_space: bool) -> Self {
        Self {
            ignore_single_space,
            previous_size: 0,
            previous_kind: None,
            active_key: None,
        }
    }

    fn transition(&mut self, line: &str) -> Transition {
        let Some((kind, width)) = leading_indent(line) else {
            self.previous_size = 0;
            self.previous_kind = None;
            return Transition::Reset;
        };

        // A single-space indent reads as alignment, not a convention.
        // Skipping leaves the state untouched, as if the line were not
        // there at all; a skip is weaker than a reset.
        if self.ignore_single_space && kind == IndentKind::Space && width == 1 {
            return Transition::Skip;
        }

        // Switching between tabs and spaces invalidates the size baseline.
        if self.previous_kind != Some(kind) {
            self.previous_size = 0;
        }
        self.previous_kind = Some(kind);

        let delta = width as isize - self.previous_size as isize;
        self.previous_size = width;

        if delta == 0 {
            match self.active_key {
                Some(key) => Transition::RepeatLevel(key),
                // A repeated level before any level change; nothing to credit.
                None => Transition::Skip,
            }
        } else {
            let key = IndentKey {
                kind,
                amount: delta.unsigned_abs(),
            };
            self.active_key = Some(key);
            Transition::NewLevel(key)
        }
    }
}

/// Leading whitespace run of a line: its family and length. A mixed run
/// counts only the characters matching the first one.
fn leading_indent(line: &str) -> Option<(IndentKind, usize)> {
    let bytes = line.as_bytes();
    match bytes.first()? {
        b' ' => Some((
            IndentKind::Space,
            bytes.iter().take_while(|&&b| b == b' ').count(),
        )),
        b'\t' => Some((
            IndentKind::Tab,
            bytes.iter().take_while(|&&b| b == b'\t').count(),
        )),
        _ => None,
    }
}

/// Build the frequency table of indent steps observed in `text`.
///
/// One pass, line by line: each line either newly enters an indent step
/// (bumping that step's use count), repeats the previous line's level
/// (bumping the active step's weight), or leaves the table alone. With
/// `ignore_single_space_indents`, lines indented by exactly one space are
/// treated as if they were not there.
pub fn indent_stats(text: &str, ignore_single_space_indents: bool) -> IndentStats {
    let mut stats = IndentStats::new();
    let mut classifier = Classifier::new(ignore_single_space_indents);

    for line in text.split('\n') {
        if line.is_empty() {
            continue;
        }
        match classifier.transition(line) {
            Transition::NewLevel(key) => stats.entry(key).or_default().use_count += 1,
            Transition::RepeatLevel(key) => stats.entry(key).or_default().weight += 1,
            Transition::Reset | Transition::Skip => {}
        }
    }

    stats
}

/// Pick the winning indent step from a frequency table.
///
/// The tab and space families are compared first on their summed
/// `(use_count, weight)` support; an exact tie between the two means the
/// file has no majority convention and nothing is selected. Within the
/// winning family, the step with the highest use count wins, weight breaks
/// ties, and a full tie keeps the step that was observed first.
pub fn select(stats: &IndentStats) -> Option<IndentKey> {
    let mut tab = (0u32, 0u32);
    let mut space = (0u32, 0u32);
    for (key, counts) in stats {
        let total = match key.kind {
            IndentKind::Tab => &mut tab,
            IndentKind::Space => &mut space,
        };
        total.0 += counts.use_count;
        total.1 += counts.weight;
    }

    let kind = match tab.cmp(&space) {
        Ordering::Greater => IndentKind::Tab,
        Ordering::Less => IndentKind::Space,
        Ordering::Equal => return None,
    };

    let mut best: Option<(IndentKey, KeyStats)> = None;
    for (&key, &counts) in stats {
        if key.kind != kind {
            continue;
        }
        let improves = match best {
            None => true,
            Some((_, top)) => (counts.use_count, counts.weight) > (top.use_count, top.weight),
        };
        if improves {
            best = Some((key, counts));
        }
    }

    best.map(|(key, _)| key)
}

/// Detect the indentation convention of `text`.
///
/// Runs the classifier with single-space indents ignored; if that yields no
/// observations at all (a file indented purely with single spaces), runs
/// again counting them, so such files still detect as one space. Returns
/// `None` when no indentation signal exists or the tab and space families
/// are in an exact tie.
///
/// # Example
///
/// ```rust
/// use stylesniff::indent::{IndentKind, detect_indent};
///
/// let style = detect_indent("fn main() {\n    body();\n}\n").unwrap();
/// assert_eq!(style.kind, IndentKind::Space);
/// assert_eq!(style.amount, 4);
/// assert_eq!(style.indent, "    ");
/// ```
pub fn detect_indent(text: &str) -> Option<IndentStyle> {
    let mut stats = indent_stats(text, true);
    if stats.is_empty() {
        stats = indent_stats(text, false);
    }

    let key = select(&stats)?;
    Some(IndentStyle {
        kind: key.kind,
        amount: key.amount,
        indent: key.kind.unit().repeat(key.amount),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(kind: IndentKind, amount: usize) -> IndentKey {
        IndentKey { kind, amount }
    }

    #[test]
    fn transitions_track_level_changes() {
        let mut c = Classifier::new(false);
        assert_eq!(
            c.transition("\tone"),
            Transition::NewLevel(key(IndentKind::Tab, 1))
        );
        assert_eq!(
            c.transition("\ttwo"),
            Transition::RepeatLevel(key(IndentKind::Tab, 1))
        );
        assert_eq!(
            c.transition("\t\tthree"),
            Transition::NewLevel(key(IndentKind::Tab, 1))
        );
        assert_eq!(c.transition("flat"), Transition::Reset);
    }

    #[test]
    fn kind_change_resets_the_size_baseline() {
        let mut c = Classifier::new(false);
        assert_eq!(
            c.transition("    a"),
            Transition::NewLevel(key(IndentKind::Space, 4))
        );
        // The tab width is measured against a fresh baseline, not the four
        // spaces above.
        assert_eq!(
            c.transition("\tb"),
            Transition::NewLevel(key(IndentKind::Tab, 1))
        );
    }

    #[test]
    fn skipped_single_space_lines_are_invisible() {
        let mut c = Classifier::new(true);
        assert_eq!(
            c.transition("\ta"),
            Transition::NewLevel(key(IndentKind::Tab, 1))
        );
        assert_eq!(c.transition(" aligned"), Transition::Skip);
        // The skip did not reset anything: the next tab line is a repeat of
        // the pre-skip level.
        assert_eq!(
            c.transition("\tb"),
            Transition::RepeatLevel(key(IndentKind::Tab, 1))
        );
    }

    #[test]
    fn repeats_credit_the_active_step() {
        let stats = indent_stats("\ta\n\t\tb\n\t\tc\n\t\td\n", false);
        assert_eq!(
            stats[&key(IndentKind::Tab, 1)],
            KeyStats {
                use_count: 2,
                weight: 2
            }
        );
    }

    #[test]
    fn blank_lines_change_nothing() {
        let with_blanks = indent_stats("\ta\n\n\n\tb\n", false);
        let without = indent_stats("\ta\n\tb\n", false);
        assert_eq!(with_blanks, without);
    }

    #[test]
    fn selector_prefers_family_support_over_entry_order() {
        // Three steps with one use each; the space family outweighs the tab.
        let stats = indent_stats("  1;\n\t2;\n      3;\n", true);
        assert_eq!(select(&stats), Some(key(IndentKind::Space, 2)));
    }

    #[test]
    fn selector_abstains_on_a_family_tie() {
        let stats = indent_stats("\t1;\n  2;\n", true);
        assert_eq!(select(&stats), None);
    }

    #[test]
    fn weight_breaks_use_count_ties_within_a_family() {
        // s3 is seen first, but s2 carries a repeat and wins the tie.
        let stats = indent_stats("   a\n     b\n     c\n", true);
        assert_eq!(select(&stats), Some(key(IndentKind::Space, 2)));
    }

    #[test]
    fn full_tie_keeps_the_first_seen_step() {
        let stats = indent_stats("  a\n      b\n", true);
        assert_eq!(select(&stats), Some(key(IndentKind::Space, 2)));
    }

    #[test]
    fn empty_stats_select_nothing() {
        assert_eq!(select(&IndentStats::new()), None);
    }
}
