//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "findfmt",
    version,
    about = "Terminal reports for static-analysis findings",
    long_about = "findfmt — render analysis results dumped by a static-analysis tool as a readable terminal report.\n\nConfiguration precedence: CLI > findfmt.toml > defaults.",
    after_help = "Examples:\n  findfmt report result.json\n  analyse --json | findfmt report\n  findfmt report result.json --width 100 --no-color",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current findfmt version."
    )]
    Version,
    /// Render an analysis result
    #[command(
        about = "Render a report",
        long_about = "Read an analysis result (JSON) and print the terminal report. Exits 0 when there is nothing to report, 1 otherwise, 2 on invalid input.",
        after_help = "Examples:\n  findfmt report result.json\n  findfmt report - < result.json"
    )]
    Report {
        #[arg(help = "Result JSON file; '-' or omitted reads stdin")]
        input: Option<String>,
        #[arg(long, help = "Repository root used for config discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Terminal width (default: detected)")]
        width: Option<usize>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored output")]
        no_color: bool,
        #[arg(long, help = "Directory paths are shown relative to (default: current dir)")]
        base_dir: Option<String>,
    },
}
