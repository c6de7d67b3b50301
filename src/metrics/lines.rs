//! Physical and logical LOC.

use crate::heuristics;
use crate::lang::Family;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    pub physical: usize,
    pub logical: usize,
}

/// Counts physical and heuristic logical LOC for one file.
///
/// Physical LOC is the number of line records; a trailing partial line still
/// counts. Logical LOC skips blank lines and single-line comments, then for
/// the C-like family counts semicolons plus one extra for any control-flow
/// keyword on the line; for the indentation family every surviving line
/// counts exactly once.
#[must_use]
pub fn measure(text: &str, family: Family) -> LineCounts {
    let mut counts = LineCounts::default();
    let marker = family.comment_marker();

    for line in text.lines() {
        counts.physical += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(marker) {
            continue;
        }

        match family {
            Family::CLike => {
                counts.logical += trimmed.matches(';').count();
                if heuristics::has_logical_keyword(trimmed) {
                    counts.logical += 1;
                }
            }
            Family::Indent => counts.logical += 1,
        }
    }

    counts
}
