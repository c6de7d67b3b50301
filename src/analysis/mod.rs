//! The analysis engine: parallel per-file scanning and the deterministic
//! reduction that follows.

mod engine;
mod worker;

pub use engine::Engine;
pub use worker::{scan_file, FileOutcome};
