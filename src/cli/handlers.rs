//! Command handling for the `locsmith` binary.

use anyhow::Result;
use colored::Colorize;

use crate::analysis::Engine;
use crate::config::Config;
use crate::discovery;
use crate::exit::LocsmithExit;
use crate::reporting::{console, print_json, writers};

use super::args::Cli;

/// Runs the analysis described by the parsed arguments.
///
/// Setup failures (missing root, empty language set) exit non-zero; a single
/// file failing to read never does.
///
/// # Errors
/// Returns error if artifact writing or serialization fails.
pub fn run(cli: Cli) -> Result<LocsmithExit> {
    // A broken locsmith.toml is a pre-scan configuration failure, same as a
    // missing root: exit InvalidConfig, not a generic error.
    let config = match Config::load(cli.root, &cli.langs, cli.outdir, cli.verbose) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return Ok(LocsmithExit::InvalidConfig);
        }
    };

    let classifier = match config.validate() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            return Ok(LocsmithExit::InvalidConfig);
        }
    };

    let files = discovery::discover(&config, &classifier);
    if config.verbose {
        println!("Found {} files matching extensions", files.len());
    }
    if files.is_empty() {
        println!("No files to analyze.");
        return Ok(LocsmithExit::Success);
    }

    let outdir = config.outdir.clone();
    let engine = Engine::new(config);
    let report = engine.scan(&files);

    if cli.json {
        print_json(&report.summary())?;
    } else {
        console::print_report(&report, cli.verbose);
    }

    if !cli.no_write {
        writers::write_artifacts(&report, &outdir)?;
        println!("Wrote results to {}", outdir.display());
    }

    Ok(LocsmithExit::Success)
}
