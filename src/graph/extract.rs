//! Per-file half of call-graph construction: one forward pass with a
//! current-function pointer.

use std::collections::{BTreeMap, BTreeSet};

use crate::heuristics;
use crate::lang::Family;

/// Edges discovered in a single file, caller → distinct callees. Pure data;
/// merging into the shared graph happens after all files are scanned.
#[derive(Debug, Clone, Default)]
pub struct FileCalls {
    pub edges: BTreeMap<String, BTreeSet<String>>,
}

/// Extracts call edges from one file's text.
///
/// A definition line only moves the current-function pointer; it is not
/// scanned for calls. Lines before the first definition are ignored — there
/// is no file-level caller node. Repeated calls to the same callee collapse.
#[must_use]
pub fn extract_calls(text: &str, family: Family) -> FileCalls {
    let mut calls = FileCalls::default();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if let Some(name) = heuristics::definition_name(line, family) {
            calls.edges.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }

        let Some(caller) = &current else { continue };

        for callee in heuristics::call_targets(line) {
            calls
                .edges
                .entry(caller.clone())
                .or_default()
                .insert(callee);
        }
    }

    calls
}
