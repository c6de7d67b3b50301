//! Shared line-level heuristics: function-definition shapes, decision-point
//! cues, and call-like tokens.
//!
//! These are deliberately grammar-free. Matching is textual (substring and
//! regex), so `verify(x)` carries an `if` cue and `while(1)` looks like a
//! call target. The metrics built on top are proxies, not ground truth.

use crate::lang::Family;
use regex::Regex;
use std::sync::LazyLock;

// Return-type / name / parenthesis shape: `int main(`, `static Foo::Bar baz(`.
static C_DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z_][A-Za-z0-9_:<>]*)\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

// Words that disqualify a C-like definition match: `else if (`, `return f(`
// and friends fit the shape but are statements, not boundaries.
const NOT_A_RETURN_TYPE: [&str; 4] = ["return", "else", "new", "throw"];
const NOT_A_FUNCTION_NAME: [&str; 4] = ["if", "for", "while", "switch"];

static PY_DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*def\s+([A-Za-z_][A-Za-z0-9_]*)\s*\(")
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});

// Identifier immediately followed by an open paren.
static CALL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\(").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Control-flow cues that count as decision points. Substring containment,
/// matching the coarseness of the rest of the line scanner.
const DECISION_KEYWORDS: [&str; 6] = ["if", "for", "while", "case", "elif", "else if"];

/// Control-flow keywords that weight a line in logical-LOC counting.
const LOGICAL_KEYWORDS: [&str; 5] = ["if", "for", "while", "case", "else"];

/// Recovers a function name if the line matches the family's definition shape.
#[must_use]
pub fn definition_name(line: &str, family: Family) -> Option<String> {
    match family {
        Family::CLike => {
            for caps in C_DEF_RE.captures_iter(line) {
                let (Some(ret), Some(name)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                if NOT_A_RETURN_TYPE.contains(&ret.as_str())
                    || NOT_A_FUNCTION_NAME.contains(&name.as_str())
                {
                    continue;
                }
                return Some(name.as_str().to_string());
            }
            None
        }
        Family::Indent => PY_DEF_RE
            .captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string()),
    }
}

/// Decision-point evidence on a single line: +1 for any control-flow keyword,
/// +1 for a short-circuit boolean operator, +1 for `except` (Indent family).
#[must_use]
pub fn decision_hits(line: &str, family: Family) -> usize {
    let mut hits = 0;
    if DECISION_KEYWORDS.iter().any(|kw| line.contains(kw)) {
        hits += 1;
    }
    if line.contains("&&") || line.contains("||") {
        hits += 1;
    }
    if family == Family::Indent && line.contains("except") {
        hits += 1;
    }
    hits
}

/// True if the trimmed line carries any logical-LOC control keyword.
#[must_use]
pub fn has_logical_keyword(line: &str) -> bool {
    LOGICAL_KEYWORDS.iter().any(|kw| line.contains(kw))
}

/// All call-like tokens on a line: `identifier(`.
#[must_use]
pub fn call_targets(line: &str) -> Vec<String> {
    CALL_RE
        .captures_iter(line)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
