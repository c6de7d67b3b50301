//! Worker module: the complete analysis of a single file.
//!
//! Each invocation is pure with respect to shared state — it reads one file,
//! computes a full result, and returns it. Merging happens elsewhere, after
//! every worker has finished.

use std::path::Path;

use crate::config::Config;
use crate::graph::{extract_calls, FileCalls};
use crate::lang::family_of;
use crate::metrics::complexity::{self, ComplexityAnalyzer, FunctionSpan};
use crate::metrics::{halstead, lines};
use crate::types::FileMetrics;

/// Everything one file contributes to the run.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub metrics: FileMetrics,
    pub functions: Vec<FunctionSpan>,
    pub calls: FileCalls,
}

/// Analyzes one file. Read failures (permission, encoding, vanished file)
/// degrade to zeroed metrics; the run never aborts on a single file.
#[must_use]
pub fn scan_file(path: &Path, config: &Config, analyzer: &dyn ComplexityAnalyzer) -> FileOutcome {
    let relative = config.relative(path).to_path_buf();

    let Ok(source) = std::fs::read_to_string(path) else {
        if config.verbose {
            eprintln!("WARN: Could not read {}, recording zero metrics", path.display());
        }
        return FileOutcome {
            metrics: FileMetrics::unreadable(relative),
            functions: Vec::new(),
            calls: FileCalls::default(),
        };
    };

    let family = family_of(path);

    let counts = lines::measure(&source, family);
    let functions = analyzer.analyze(&source, family);
    let cc_total = complexity::file_total(&functions);
    let cc_avg = complexity::average(&functions);

    let volume = halstead::volume(&source, family);
    let maintainability = halstead::maintainability(volume, cc_avg, counts.logical);
    let code_smells = halstead::smell_count(&functions, counts.logical, &config.smells);
    let comment_percentage = halstead::comment_percentage(&source, family, counts.physical);

    let calls = extract_calls(&source, family);

    FileOutcome {
        metrics: FileMetrics {
            path: relative,
            loc_physical: counts.physical,
            loc_logical: counts.logical,
            cc_total,
            halstead_volume: volume,
            maintainability_index: maintainability,
            code_smells,
            comment_percentage,
            function_count: functions.len(),
        },
        functions,
        calls,
    }
}
