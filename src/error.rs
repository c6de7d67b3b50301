// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocsmithError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Root path does not exist or is not a directory: {0}")]
    RootNotFound(PathBuf),

    #[error("No known extensions for requested languages: [{0}]")]
    EmptyLanguageSet(String),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LocsmithError>;
