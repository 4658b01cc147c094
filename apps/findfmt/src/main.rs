//! findfmt CLI binary entry point.
//! Loads a result, renders it with the terminal reporter and exits with its status.

use clap::Parser;
use findfmt::cli::{Cli, Commands};
use findfmt::output::{use_colors, ConsoleOutput};
use findfmt::reporter::{Reporter, TerminalReporter};
use findfmt::{config, models, utils};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Report {
            input,
            repo_root,
            width,
            no_color,
            base_dir,
        } => {
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                width,
                if no_color { Some(false) } else { None },
                base_dir.as_deref(),
            );
            if eff.config_found {
                log::info!("using findfmt config from {}", eff.repo_root.display());
            } else {
                log::info!(
                    "no findfmt config under {}; using defaults",
                    eff.repo_root.display()
                );
            }
            let color = use_colors(Some(eff.color));

            if input.is_none() {
                log::info!("no input file given; reading result JSON from stdin");
            }
            let result = match models::load(input.as_deref()) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(color), e);
                    if input.is_none() {
                        eprintln!(
                            "{} pass a result file or pipe JSON into stdin",
                            utils::note_prefix(color)
                        );
                    }
                    std::process::exit(e.exit_code());
                }
            };

            let reporter = TerminalReporter::new(eff.width, eff.base_dir);
            let mut output = ConsoleOutput::new(color);
            let status = reporter.format_result(&result, &mut output);
            std::process::exit(status.exit_code());
        }
    }
}
