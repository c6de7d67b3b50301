pub mod aggregate;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exit;
pub mod graph;
pub mod heuristics;
pub mod lang;
pub mod metrics;
pub mod reporting;
pub mod types;
