use clap::Parser;
use colored::Colorize;

use locsmith_core::cli::{args::Cli, handlers};
use locsmith_core::exit::LocsmithExit;

fn main() -> LocsmithExit {
    let cli = Cli::parse();

    match handlers::run(cli) {
        Ok(exit) => exit,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            LocsmithExit::Error
        }
    }
}
