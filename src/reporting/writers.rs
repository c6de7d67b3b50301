//! Artifact writers: the CSV/JSON files a run leaves behind.
//!
//! Layout follows the classic output set: `summary.json`, `per_file.csv`,
//! `per_function.csv`, `per_module.csv`, and `callgraph.json` under the
//! configured output directory.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::types::RepositoryReport;

/// Writes all artifacts for a finished run.
///
/// # Errors
/// Returns error if the output directory cannot be created or a file write
/// fails.
pub fn write_artifacts(report: &RepositoryReport, outdir: &Path) -> Result<()> {
    fs::create_dir_all(outdir)
        .with_context(|| format!("Failed to create output dir: {}", outdir.display()))?;

    write_json(&outdir.join("summary.json"), &report.summary())?;
    write_json(&outdir.join("callgraph.json"), &report.call_graph)?;

    fs::write(outdir.join("per_file.csv"), per_file_csv(report))
        .context("Failed to write per_file.csv")?;
    fs::write(outdir.join("per_function.csv"), per_function_csv(report))
        .context("Failed to write per_function.csv")?;
    fs::write(outdir.join("per_module.csv"), per_module_csv(report))
        .context("Failed to write per_module.csv")?;

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data).context("Failed to serialize artifact")?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Quotes a CSV field when it carries a delimiter or quote.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn per_file_csv(report: &RepositoryReport) -> String {
    let mut out = String::from(
        "file,loc_physical,loc_logical,cc_total,halstead_volume,maintainability_index,code_smells,comment_percentage,function_count\n",
    );
    for f in &report.files {
        let _ = writeln!(
            out,
            "{},{},{},{},{:.2},{:.2},{},{:.2},{}",
            csv_field(&f.path.to_string_lossy()),
            f.loc_physical,
            f.loc_logical,
            f.cc_total,
            f.halstead_volume,
            f.maintainability_index,
            f.code_smells,
            f.comment_percentage,
            f.function_count,
        );
    }
    out
}

fn per_function_csv(report: &RepositoryReport) -> String {
    let mut out = String::from("file,function,cc,fan_in,fan_out\n");
    for f in &report.functions {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            csv_field(&f.file.to_string_lossy()),
            csv_field(&f.function),
            f.cc,
            f.fan_in,
            f.fan_out,
        );
    }
    out
}

fn per_module_csv(report: &RepositoryReport) -> String {
    let mut out = String::from(
        "module,loc_physical,loc_logical,cc_total,function_count,fan_in_total,fan_out_total\n",
    );
    for m in &report.modules {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            csv_field(&m.module),
            m.loc_physical,
            m.loc_logical,
            m.cc_total,
            m.function_count,
            m.fan_in_total,
            m.fan_out_total,
        );
    }
    out
}
