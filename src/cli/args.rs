use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "locsmith", version, about = "Static source metrics and call-graph extraction")]
pub struct Cli {
    /// Root directory of the repository to analyze
    pub root: PathBuf,

    /// Comma-separated language tags (c, cpp, java, py, js, ts)
    #[arg(long, short, default_value = "c,cpp,java,py,js,ts")]
    pub langs: String,

    /// Directory for the report artifacts
    #[arg(long, short, default_value = "results")]
    pub outdir: PathBuf,

    /// Print the summary as JSON instead of the console report
    #[arg(long)]
    pub json: bool,

    /// Skip writing artifacts (console/JSON output only)
    #[arg(long)]
    pub no_write: bool,

    /// Per-file progress lines and walk warnings
    #[arg(long, short)]
    pub verbose: bool,
}
