//! Console rendering of a finished run.

use colored::Colorize;

use crate::types::RepositoryReport;

/// Prints per-file metric lines followed by the summary block.
pub fn print_report(report: &RepositoryReport, verbose: bool) {
    if verbose {
        for f in &report.files {
            println!(
                "{} -> CC:{} Hal:{:.1} MI:{:.1} Smells:{} LLOC:{} LOC:{} Comments:{:.1}%",
                f.path.display(),
                f.cc_total,
                f.halstead_volume,
                f.maintainability_index,
                f.code_smells,
                f.loc_logical,
                f.loc_physical,
                f.comment_percentage,
            );
        }
    }
    print_summary(report);
}

fn print_summary(report: &RepositoryReport) {
    println!("---------------------------------------------------");
    println!(
        "{} {} files, {} functions, {} modules",
        "Analyzed".green().bold(),
        report.file_count,
        report.totals.function_count,
        report.modules.len(),
    );
    println!(
        "  LOC: {} physical / {} logical",
        report.totals.loc_physical, report.totals.loc_logical,
    );
    println!("  Complexity total: {}", report.totals.cc_total);
    println!(
        "  Call graph: {} nodes",
        report.call_graph.node_count().to_string().cyan(),
    );
    println!("  Completed in {}ms", report.duration_ms);
}
