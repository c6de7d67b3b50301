// src/exit.rs
//! Standardized process exit codes for `Locsmith`.
//!
//! Provides a stable contract for scripts and automation. A failed analysis
//! of an individual file is never an exit-code event; only setup failures are.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LocsmithExit {
    /// Analysis completed and the report was produced.
    Success = 0,
    /// Generic error (I/O while writing artifacts, serialization).
    Error = 1,
    /// Setup validation failed (missing root, empty language set).
    InvalidConfig = 2,
}

impl LocsmithExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for LocsmithExit {
    fn report(self) -> std::process::ExitCode {
        std::process::ExitCode::from(u8::try_from(self.code()).unwrap_or(1))
    }
}
