use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Thresholds for the code-smell checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmellConfig {
    #[serde(default = "default_long_function")]
    pub long_function_lines: usize,
    #[serde(default = "default_deep_nesting")]
    pub deep_nesting: usize,
    #[serde(default = "default_large_file")]
    pub large_file_logical: usize,
}

impl Default for SmellConfig {
    fn default() -> Self {
        Self {
            long_function_lines: default_long_function(),
            deep_nesting: default_deep_nesting(),
            large_file_logical: default_large_file(),
        }
    }
}

const fn default_long_function() -> usize { 50 }
const fn default_deep_nesting() -> usize { 3 }
const fn default_large_file() -> usize { 400 }

/// On-disk shape of `locsmith.toml`. Everything is optional.
///
/// ```toml
/// [languages]
/// py = ["py", "pyi"]
///
/// [smells]
/// long_function_lines = 80
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocsmithToml {
    /// Per-tag extension overrides. A listed tag replaces its default set.
    #[serde(default)]
    pub languages: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub smells: SmellConfig,
}
