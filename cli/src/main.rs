mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{handle_check, handle_defaults, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ok = match cli.command {
        Commands::Check {
            file,
            all_missing,
            print,
        } => handle_check(&file, all_missing, print)?,
        Commands::Defaults => {
            handle_defaults()?;
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// Logs go to stderr so `--print` output stays clean
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
