//! Runtime configuration: CLI inputs merged over the optional
//! `locsmith.toml` in the scanned root.

mod types;

pub use types::{LocsmithToml, SmellConfig};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LocsmithError, Result};
use crate::lang::{Classifier, LanguageRegistry};

pub const CONFIG_FILE: &str = "locsmith.toml";

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub langs: Vec<String>,
    pub outdir: PathBuf,
    pub verbose: bool,
    pub smells: SmellConfig,
    registry: LanguageRegistry,
}

impl Config {
    /// Builds the runtime config. Reads `<root>/locsmith.toml` when present;
    /// a missing file means defaults, a malformed file is a real error.
    pub fn load(root: PathBuf, langs: &str, outdir: PathBuf, verbose: bool) -> Result<Self> {
        let mut registry = LanguageRegistry::with_defaults();
        let mut smells = SmellConfig::default();

        let config_path = root.join(CONFIG_FILE);
        if config_path.is_file() {
            let raw = fs::read_to_string(&config_path).map_err(|source| LocsmithError::Io {
                source,
                path: config_path.clone(),
            })?;
            let parsed: LocsmithToml = toml::from_str(&raw)?;
            for (tag, exts) in &parsed.languages {
                registry.set_tag(tag, exts);
            }
            smells = parsed.smells;
        }

        let langs = langs
            .split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self {
            root,
            langs,
            outdir,
            verbose,
            smells,
            registry,
        })
    }

    /// Fatal setup checks, run before any scanning: the root must be a
    /// directory and the requested tags must resolve to at least one
    /// extension.
    pub fn validate(&self) -> Result<Classifier> {
        if !self.root.is_dir() {
            return Err(LocsmithError::RootNotFound(self.root.clone()));
        }

        let classifier = Classifier::new(self.registry.extensions_for(&self.langs));
        if classifier.is_empty() {
            return Err(LocsmithError::EmptyLanguageSet(self.langs.join(",")));
        }

        Ok(classifier)
    }

    /// Relativizes a discovered path against the scanned root.
    #[must_use]
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
