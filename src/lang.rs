//! Language tags, family classification, and the extension registry.
//!
//! Locsmith does not parse grammars; the only language knowledge it carries
//! is which extensions belong to which tag and which line-level family
//! (brace-delimited vs. indentation-delimited) an extension falls into.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Line-level syntax family. Drives comment markers, statement counting,
/// and the function-definition heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// C, C++, Java, JS, TS: semicolon statements, `//` and `/* */` comments.
    CLike,
    /// Python: one statement per line, `#` comments.
    Indent,
}

impl Family {
    #[must_use]
    pub fn from_ext(ext: &str) -> Self {
        if ext.eq_ignore_ascii_case("py") {
            Self::Indent
        } else {
            Self::CLike
        }
    }

    /// Single-line comment marker for this family.
    #[must_use]
    pub fn comment_marker(self) -> &'static str {
        match self {
            Self::CLike => "//",
            Self::Indent => "#",
        }
    }
}

/// Maps language tags (`c`, `cpp`, `java`, `py`, `js`, `ts`) to extension sets.
/// Unknown tags resolve to nothing; that is a feature, not an error.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    tags: BTreeMap<String, Vec<String>>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut tags = BTreeMap::new();
        let defaults: [(&str, &[&str]); 6] = [
            ("c", &["c", "h"]),
            ("cpp", &["cpp", "cc", "cxx", "hpp", "hh", "hxx"]),
            ("java", &["java"]),
            ("py", &["py"]),
            ("js", &["js", "jsx"]),
            ("ts", &["ts", "tsx"]),
        ];
        for (tag, exts) in defaults {
            tags.insert(
                tag.to_string(),
                exts.iter().map(|e| (*e).to_string()).collect(),
            );
        }
        Self { tags }
    }

    /// Replaces the extension set for a tag. Leading dots are tolerated so
    /// config files may write either `"py"` or `".py"`.
    pub fn set_tag(&mut self, tag: &str, extensions: &[String]) {
        let cleaned = extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self.tags.insert(tag.to_ascii_lowercase(), cleaned);
    }

    /// Union of the extension sets for the requested tags.
    /// Unrecognized tags contribute nothing.
    #[must_use]
    pub fn extensions_for(&self, tags: &[String]) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for tag in tags {
            if let Some(exts) = self.tags.get(&tag.to_ascii_lowercase()) {
                out.extend(exts.iter().cloned());
            }
        }
        out
    }
}

/// Answers "does this path belong to the requested language set."
#[derive(Debug, Clone)]
pub struct Classifier {
    extensions: BTreeSet<String>,
}

impl Classifier {
    #[must_use]
    pub fn new(extensions: BTreeSet<String>) -> Self {
        Self { extensions }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.contains(&e.to_ascii_lowercase()))
    }
}

/// Family of a path, by extension. Paths without an extension fall into the
/// C-like family; they never reach the scanners through normal discovery.
#[must_use]
pub fn family_of(path: &Path) -> Family {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    Family::from_ext(ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unknown_tag_is_silent() {
        let reg = LanguageRegistry::with_defaults();
        let exts = reg.extensions_for(&["fortran".to_string(), "py".to_string()]);
        assert_eq!(exts.len(), 1);
        assert!(exts.contains("py"));
    }

    #[test]
    fn test_classifier_membership() {
        let reg = LanguageRegistry::with_defaults();
        let c = Classifier::new(reg.extensions_for(&["c".to_string()]));
        assert!(c.matches(&PathBuf::from("src/main.c")));
        assert!(c.matches(&PathBuf::from("include/defs.h")));
        assert!(!c.matches(&PathBuf::from("src/main.py")));
        assert!(!c.matches(&PathBuf::from("Makefile")));
    }
}
