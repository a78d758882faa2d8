mod cli;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::utils::paths;
use crate::utils::progress::CliProgressHandler;
use clap::Parser;
use graphein::graph::config::GraphConfig;
use graphein::workflows::convert::{self, BatchReport};
use graphein::workflows::progress::ProgressReporter;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\nError: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("graphein v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    if let Some(num_threads) = cli.threads {
        info!(
            "Setting Rayon global thread pool to {} threads.",
            num_threads
        );
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| {
                CliError::Other(anyhow::anyhow!("Failed to build global thread pool: {}", e))
            })?;
    }

    let config = GraphConfig {
        cutoff: cli.cutoff,
        on_unknown_element: cli.on_unknown_element.into(),
    };
    let inputs = paths::expand_globs(&cli.inputs)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let report = convert::convert_batch(&inputs, &config, &reporter)?;
    print_summary(&report);

    Ok(())
}

fn print_summary(report: &BatchReport) {
    println!(
        "Converted {}/{} structure file(s).",
        report.converted.len(),
        report.total()
    );
    if !report.failures.is_empty() {
        println!("{} file(s) failed:", report.failures.len());
        for (path, error) in &report.failures {
            eprintln!("  ✗ {}: {}", path.display(), error);
        }
    }
}
