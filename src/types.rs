//! Common data structures shared across the scanners, the engine, and the
//! reporting layer. Everything here is immutable once the run completes.

use serde::Serialize;
use std::path::PathBuf;

use crate::aggregate::ModuleAggregate;
use crate::graph::CallGraph;

/// Per-file metrics. Paths are relative to the scanned root.
#[derive(Debug, Clone, Serialize)]
pub struct FileMetrics {
    pub path: PathBuf,
    pub loc_physical: usize,
    pub loc_logical: usize,
    pub cc_total: usize,
    pub halstead_volume: f64,
    pub maintainability_index: f64,
    pub code_smells: usize,
    pub comment_percentage: f64,
    pub function_count: usize,
}

impl FileMetrics {
    /// Zeroed metrics for a file that could not be read. The file still
    /// appears in the report; the run does not abort.
    #[must_use]
    pub fn unreadable(path: PathBuf) -> Self {
        Self {
            path,
            loc_physical: 0,
            loc_logical: 0,
            cc_total: 0,
            halstead_volume: 0.0,
            // Floor-1 substitutions leave only the constant term, clamped.
            maintainability_index: 100.0,
            code_smells: 0,
            comment_percentage: 0.0,
            function_count: 0,
        }
    }
}

/// One recovered function. Names are not unique across files; `file` keeps
/// provenance so a qualified-name variant can be layered on later.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionRecord {
    pub file: PathBuf,
    pub function: String,
    pub cc: usize,
    pub fan_in: usize,
    pub fan_out: usize,
}

/// Whole-repository totals.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Totals {
    pub loc_physical: usize,
    pub loc_logical: usize,
    pub cc_total: usize,
    pub function_count: usize,
}

/// The final product of a run: every table the collaborators consume.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryReport {
    pub file_count: usize,
    pub totals: Totals,
    pub files: Vec<FileMetrics>,
    pub functions: Vec<FunctionRecord>,
    pub modules: Vec<ModuleAggregate>,
    pub call_graph: CallGraph,
    /// Wall-clock time; console-only. Never serialized, so identical runs
    /// produce identical output.
    #[serde(skip)]
    pub duration_ms: u128,
}

/// Compact summary shape shared by `summary.json` and `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub file_count: usize,
    pub totals: Totals,
    pub module_count: usize,
    pub call_graph_nodes: usize,
}

impl RepositoryReport {
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            file_count: self.file_count,
            totals: self.totals,
            module_count: self.modules.len(),
            call_graph_nodes: self.call_graph.node_count(),
        }
    }
}
