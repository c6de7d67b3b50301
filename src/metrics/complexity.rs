//! Heuristic cyclomatic complexity.
//!
//! Single forward pass over lines with one mutable "current function" slot.
//! Decision points are counted per textual cue, not per control-flow-graph
//! edge; precision is traded for being grammar-free across families.

use crate::heuristics;
use crate::lang::Family;

/// One recovered function span with its accumulated complexity score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpan {
    pub name: String,
    pub cc: usize,
    /// 1-based first line (the definition line).
    pub start_line: usize,
    /// 1-based last line before the next definition, or end of file.
    pub end_line: usize,
    /// Maximum nesting depth, when the analyzer can report it. The built-in
    /// heuristic cannot; external analyzers may.
    pub max_depth: Option<usize>,
}

impl FunctionSpan {
    #[must_use]
    pub fn line_span(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}

/// The complexity capability is injectable: callers may substitute an
/// external analyzer at configuration time. Absence of one never fails a run;
/// the built-in heuristic is always available.
pub trait ComplexityAnalyzer: Send + Sync {
    fn analyze(&self, text: &str, family: Family) -> Vec<FunctionSpan>;
}

/// Name used for the implicit whole-file function when a non-empty file has
/// no recognizable function boundary.
pub const IMPLICIT_FUNCTION: &str = "<file>";

/// The built-in line-scanning analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl ComplexityAnalyzer for HeuristicAnalyzer {
    fn analyze(&self, text: &str, family: Family) -> Vec<FunctionSpan> {
        let mut spans: Vec<FunctionSpan> = Vec::new();
        let mut current: Option<FunctionSpan> = None;
        // Cues seen before the first definition. Committed only if the file
        // never produces a boundary; otherwise dropped.
        let mut preamble_hits = 0;
        let mut last_line = 0;

        for (idx, line) in text.lines().enumerate() {
            last_line = idx + 1;

            if let Some(name) = heuristics::definition_name(line, family) {
                if let Some(mut open) = current.take() {
                    open.end_line = idx;
                    spans.push(open);
                }
                current = Some(FunctionSpan {
                    name,
                    cc: 1,
                    start_line: last_line,
                    end_line: last_line,
                    max_depth: None,
                });
            }

            // The definition line itself is still scanned for cues.
            let hits = heuristics::decision_hits(line, family);
            match current.as_mut() {
                Some(open) => open.cc += hits,
                None => preamble_hits += hits,
            }
        }

        if let Some(mut open) = current.take() {
            open.end_line = last_line;
            spans.push(open);
        } else if last_line > 0 {
            spans.push(FunctionSpan {
                name: IMPLICIT_FUNCTION.to_string(),
                cc: 1 + preamble_hits,
                start_line: 1,
                end_line: last_line,
                max_depth: None,
            });
        }

        spans
    }
}

/// Sum of per-function scores. Empty files have no functions and total 0.
#[must_use]
pub fn file_total(spans: &[FunctionSpan]) -> usize {
    spans.iter().map(|f| f.cc).sum()
}

/// Average per-function score, 0.0 when no functions were recovered.
#[must_use]
pub fn average(spans: &[FunctionSpan]) -> f64 {
    if spans.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    {
        file_total(spans) as f64 / spans.len() as f64
    }
}
