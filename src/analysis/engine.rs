//! Main execution logic for the `Locsmith` analysis engine.
//!
//! Phase 1 scans files in parallel; each worker returns a complete, immutable
//! per-file result. Phase 2 is a single-threaded reduction: call-graph union,
//! fan statistics, module aggregation, repository totals. All merge
//! operations are commutative and associative, so completion order cannot
//! leak into any numeric output.

use std::path::PathBuf;

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::aggregate;
use crate::config::Config;
use crate::graph::CallGraph;
use crate::metrics::{ComplexityAnalyzer, HeuristicAnalyzer};
use crate::types::{FileMetrics, FunctionRecord, RepositoryReport};

use super::worker::{self, FileOutcome};

/// The main analysis engine. Owns the config and the complexity capability.
pub struct Engine {
    config: Config,
    analyzer: Box<dyn ComplexityAnalyzer>,
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_analyzer(config, Box::new(HeuristicAnalyzer))
    }

    /// Substitutes an external complexity analyzer for the built-in
    /// heuristic. Chosen at configuration time; everything downstream is
    /// unaware of which one ran.
    #[must_use]
    pub fn with_analyzer(config: Config, analyzer: Box<dyn ComplexityAnalyzer>) -> Self {
        Self { config, analyzer }
    }

    /// Runs the full analysis over the discovered files.
    #[must_use]
    pub fn scan(&self, files: &[PathBuf]) -> RepositoryReport {
        let start = std::time::Instant::now();

        // Phase 1: per-file analysis, embarrassingly parallel.
        let outcomes: Vec<FileOutcome> = files
            .par_iter()
            .map(|path| worker::scan_file(path, &self.config, self.analyzer.as_ref()))
            .collect();

        // Phase 2: deterministic reduction.
        let call_graph = CallGraph::merge(outcomes.iter().map(|o| o.calls.clone()));
        let fan = call_graph.fan_stats();

        let mut file_metrics: Vec<FileMetrics> = Vec::with_capacity(outcomes.len());
        let mut functions: Vec<FunctionRecord> = Vec::new();

        for outcome in outcomes {
            for span in &outcome.functions {
                let stats = fan.get(&span.name).copied().unwrap_or_default();
                functions.push(FunctionRecord {
                    file: outcome.metrics.path.clone(),
                    function: span.name.clone(),
                    cc: span.cc,
                    fan_in: stats.fan_in,
                    fan_out: stats.fan_out,
                });
            }
            file_metrics.push(outcome.metrics);
        }

        let modules = aggregate::aggregate(&file_metrics, &functions);
        let totals = aggregate::totals(&modules);

        RepositoryReport {
            file_count: file_metrics.len(),
            totals,
            files: file_metrics,
            functions,
            modules,
            call_graph,
            duration_ms: start.elapsed().as_millis(),
        }
    }
}
