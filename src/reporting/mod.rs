//! Report output: colored console summary and on-disk artifacts.

pub mod console;
pub mod writers;

use anyhow::Result;

/// Prints any serializable record as pretty JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
