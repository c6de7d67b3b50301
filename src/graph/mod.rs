//! The naive cross-file call graph.
//!
//! Keys are bare function names: two files defining the same name merge into
//! one node. That flat namespace is inherited, documented behavior;
//! `FunctionRecord.file` preserves provenance for stricter variants.

pub mod extract;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

pub use extract::{extract_calls, FileCalls};

/// Fan statistics for one graph node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FanStats {
    pub fan_in: usize,
    pub fan_out: usize,
}

/// Function name → distinct callee names. Ordered maps keep iteration (and
/// every serialized artifact) independent of file-processing order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CallGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl CallGraph {
    /// Unions per-file edge sets into one graph. Set union is commutative,
    /// so the merge order carries no information.
    #[must_use]
    pub fn merge<I>(per_file: I) -> Self
    where
        I: IntoIterator<Item = FileCalls>,
    {
        let mut edges: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for file in per_file {
            for (caller, callees) in file.edges {
                edges.entry(caller).or_default().extend(callees);
            }
        }
        Self { edges }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn callees(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.edges.get(name)
    }

    /// `fan_out(f) = |callees(f)|`; duplicates collapsed by the edge set.
    #[must_use]
    pub fn fan_out(&self, name: &str) -> usize {
        self.edges.get(name).map_or(0, BTreeSet::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.edges.iter()
    }

    /// Fan-in and fan-out for every node, including callee-only nodes.
    ///
    /// Every graph key starts at fan-in 0; each distinct caller of a callee
    /// increments it, and a callee never seen as a key is initialized to 1 at
    /// first sighting. Pure counting, so the result is order-independent.
    #[must_use]
    pub fn fan_stats(&self) -> BTreeMap<String, FanStats> {
        let mut fan_in: BTreeMap<&str, usize> =
            self.edges.keys().map(|k| (k.as_str(), 0)).collect();

        for callees in self.edges.values() {
            for callee in callees {
                *fan_in.entry(callee.as_str()).or_insert(0) += 1;
            }
        }

        fan_in
            .into_iter()
            .map(|(name, fi)| {
                (
                    name.to_string(),
                    FanStats {
                        fan_in: fi,
                        fan_out: self.fan_out(name),
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Family;

    #[test]
    fn test_colliding_names_merge_across_files() {
        let file_a = extract_calls("def init():\n    setup()\n", Family::Indent);
        let file_b = extract_calls("def init():\n    teardown()\n", Family::Indent);
        let graph = CallGraph::merge([file_a, file_b]);

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.fan_out("init"), 2);
    }
}
