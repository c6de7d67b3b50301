//! Per-file metric scanners. Each scanner is a pure function over file text;
//! nothing in this module touches the filesystem or shared state.

pub mod complexity;
pub mod halstead;
pub mod lines;

pub use complexity::{ComplexityAnalyzer, FunctionSpan, HeuristicAnalyzer};
pub use lines::LineCounts;
