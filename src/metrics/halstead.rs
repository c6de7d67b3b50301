//! Halstead volume, maintainability index, comment percentage, code smells.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::SmellConfig;
use crate::lang::Family;
use crate::metrics::complexity::FunctionSpan;

/// Fixed operator vocabulary. Tokenization emits single non-word symbols, so
/// the multi-character entries only ever match when an external tokenizer
/// supplies them; they are kept for vocabulary completeness.
const OPERATORS: [&str; 32] = [
    "=", "+", "-", "*", "/", "%", "++", "--", "==", "!=", ">", "<", ">=", "<=", "&&", "||", "!",
    "+=", "-=", "*=", "/=", "%=", "&", "|", "^", "<<", ">>", ">>>", "?", ":", "->", "::",
];

static LINE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n]*").unwrap_or_else(|_| panic!("Invalid Regex")));
static BLOCK_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap_or_else(|_| panic!("Invalid Regex")));
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b|[^\s\w]").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Strips `//` line comments and `/* */` blocks (non-greedy, spans lines).
#[must_use]
pub fn strip_comments(text: &str) -> String {
    let no_line = LINE_COMMENT_RE.replace_all(text, "");
    BLOCK_COMMENT_RE.replace_all(&no_line, "").into_owned()
}

/// Halstead volume: `(N1+N2) * log2(n1+n2)`, 0 when the token stream holds
/// no recognized operator or operand. Comment stripping applies to the
/// C-like family only; the indentation family is tokenized as-is.
#[must_use]
pub fn volume(text: &str, family: Family) -> f64 {
    let code = match family {
        Family::CLike => strip_comments(text),
        Family::Indent => text.to_string(),
    };

    let mut distinct_operators: HashSet<&str> = HashSet::new();
    let mut distinct_operands: HashSet<&str> = HashSet::new();
    let mut total_operators = 0usize;
    let mut total_operands = 0usize;

    for m in TOKEN_RE.find_iter(&code) {
        let token = m.as_str();
        if OPERATORS.contains(&token) {
            distinct_operators.insert(token);
            total_operators += 1;
        } else if token.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
            distinct_operands.insert(token);
            total_operands += 1;
        }
    }

    let vocabulary = distinct_operators.len() + distinct_operands.len();
    if vocabulary == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    {
        (total_operators + total_operands) as f64 * (vocabulary as f64).log2()
    }
}

/// Maintainability index, clamped to `[0, 100]`. Volume and logical size are
/// floored at 1 so the logarithms stay defined.
#[must_use]
pub fn maintainability(volume: f64, cc_avg: f64, logical_size: usize) -> f64 {
    let vol = volume.max(1.0);
    #[allow(clippy::cast_precision_loss)]
    let size = (logical_size.max(1)) as f64;
    let mi = 171.0 - 5.2 * vol.ln() - 0.23 * cc_avg - 16.2 * size.ln();
    mi.clamp(0.0, 100.0)
}

/// Comment percentage over the original, unstripped text: single-line
/// comment lines plus the total lines spanned by `/* */` blocks (C-like
/// family only), over physical LOC.
#[must_use]
pub fn comment_percentage(text: &str, family: Family, loc_physical: usize) -> f64 {
    if loc_physical == 0 {
        return 0.0;
    }

    let marker = family.comment_marker();
    let mut comment_lines = text
        .lines()
        .filter(|l| l.trim_start().starts_with(marker))
        .count();

    if family == Family::CLike {
        comment_lines += BLOCK_COMMENT_RE
            .find_iter(text)
            .map(|m| m.as_str().matches('\n').count() + 1)
            .sum::<usize>();
    }

    #[allow(clippy::cast_precision_loss)]
    {
        comment_lines as f64 / loc_physical as f64 * 100.0
    }
}

/// Code-smell count: long functions, deep nesting (only when the analyzer
/// reports depth), oversized file.
#[must_use]
pub fn smell_count(spans: &[FunctionSpan], loc_logical: usize, config: &SmellConfig) -> usize {
    let mut smells = 0;
    for span in spans {
        if span.line_span() > config.long_function_lines {
            smells += 1;
        }
        if span.max_depth.is_some_and(|d| d > config.deep_nesting) {
            smells += 1;
        }
    }
    if loc_logical > config.large_file_logical {
        smells += 1;
    }
    smells
}
