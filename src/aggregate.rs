//! Directory-level aggregation and the repository summary.
//!
//! A module is the file's containing directory relative to the scanned root;
//! the root itself maps to the sentinel `"root"`. Aggregation is a pure
//! reduction over already-computed records — nothing is re-read.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::types::{FileMetrics, FunctionRecord, Totals};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleAggregate {
    pub module: String,
    pub loc_physical: usize,
    pub loc_logical: usize,
    pub cc_total: usize,
    pub function_count: usize,
    pub fan_in_total: usize,
    pub fan_out_total: usize,
}

/// Module key for a root-relative file path.
#[must_use]
pub fn module_key(relative: &Path) -> String {
    match relative.parent() {
        None => "root".to_string(),
        Some(p) if p.as_os_str().is_empty() => "root".to_string(),
        Some(p) => p.to_string_lossy().replace('\\', "/"),
    }
}

/// Reduces per-file and per-function records into per-module aggregates,
/// sorted by module key.
#[must_use]
pub fn aggregate(files: &[FileMetrics], functions: &[FunctionRecord]) -> Vec<ModuleAggregate> {
    let mut modules: BTreeMap<String, ModuleAggregate> = BTreeMap::new();

    for file in files {
        let key = module_key(&file.path);
        let entry = modules.entry(key.clone()).or_insert_with(|| ModuleAggregate {
            module: key,
            ..ModuleAggregate::default()
        });
        entry.loc_physical += file.loc_physical;
        entry.loc_logical += file.loc_logical;
    }

    for func in functions {
        let key = module_key(&func.file);
        let entry = modules.entry(key.clone()).or_insert_with(|| ModuleAggregate {
            module: key,
            ..ModuleAggregate::default()
        });
        entry.cc_total += func.cc;
        entry.function_count += 1;
        entry.fan_in_total += func.fan_in;
        entry.fan_out_total += func.fan_out;
    }

    modules.into_values().collect()
}

/// Repository summary: sums across all modules.
#[must_use]
pub fn totals(modules: &[ModuleAggregate]) -> Totals {
    let mut totals = Totals::default();
    for m in modules {
        totals.loc_physical += m.loc_physical;
        totals.loc_logical += m.loc_logical;
        totals.cc_total += m.cc_total;
        totals.function_count += m.function_count;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_root_sentinel() {
        assert_eq!(module_key(&PathBuf::from("main.c")), "root");
        assert_eq!(module_key(&PathBuf::from("src/main.c")), "src");
        assert_eq!(module_key(&PathBuf::from("src/net/tcp.c")), "src/net");
    }
}
