use std::error::Error;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use selection_sort_rs::cli::Cli;
use selection_sort_rs::runner::{self, RunConfig};

fn print_run(config: &RunConfig) -> Result<(), Box<dyn Error>> {
    let report = runner::run_once(config)?;
    println!("{report}");
    println!();
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("selection_sort_rs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.auto {
        let configs = runner::auto_configs(runner::time_seed());
        info!(runs = configs.len(), "auto mode");
        for config in &configs {
            print_run(config)?;
        }
        println!("Auto mode finished.");
        return Ok(());
    }

    let parsed = RunConfig::from_args(&cli.positionals());
    for warning in &parsed.warnings {
        warn!("{warning}");
    }

    print_run(&parsed.config)
}
