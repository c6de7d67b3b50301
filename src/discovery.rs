// src/discovery.rs
//! File discovery: walk the root, prune noise directories, keep files that
//! belong to the requested language set. Results are sorted so every later
//! stage sees a stable order.

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::config::Config;
use crate::lang::Classifier;

const PRUNE_DIRS: [&str; 8] = [
    ".git",
    ".hg",
    ".svn",
    "target",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
];

fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

/// Enumerates candidate files under the configured root.
#[must_use]
pub fn discover(config: &Config, classifier: &Classifier) -> Vec<PathBuf> {
    let walker = WalkDir::new(&config.root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_prune(&e.file_name().to_string_lossy()));

    let mut paths = Vec::new();
    let mut errors = 0usize;

    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && classifier.matches(entry.path()) {
                    paths.push(entry.path().to_path_buf());
                }
            }
            Err(_) => errors += 1,
        }
    }

    if errors > 0 && config.verbose {
        eprintln!("WARN: Encountered {errors} errors during file walk");
    }

    paths.sort();
    paths
}
