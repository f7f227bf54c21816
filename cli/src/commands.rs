use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crag_config::{ConfigValidator, ErrorFormatter, Reporting, DEFAULTS};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "crag")]
#[command(about = "Validate crag retrieval pipeline configuration", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration file (.yml, .yaml, .json, .toml)
    Check {
        /// Path to the configuration file
        file: PathBuf,

        /// Report every missing field of a node instead of the first one
        #[arg(long)]
        all_missing: bool,

        /// Print the validated configuration, defaults included, as YAML
        #[arg(long)]
        print: bool,
    },
    /// Print the built-in default values
    Defaults,
}

/// Returns `false` when the configuration was rejected
pub fn handle_check(file: &Path, all_missing: bool, print: bool) -> Result<bool> {
    let reporting = if all_missing {
        Reporting::AllMissing
    } else {
        Reporting::FirstOffender
    };
    debug!(?reporting, "validating {}", file.display());

    let config = match ConfigValidator::new()
        .with_reporting(reporting)
        .validate_file(file)
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", ErrorFormatter::new(err));
            return Ok(false);
        }
    };

    info!(mode = %config.mode, "configuration is valid");

    if print {
        let yaml = config.to_yaml().context("failed to render configuration")?;
        print!("{}", yaml);
    } else {
        println!("{}: OK ({} mode)", file.display(), config.mode);
    }

    Ok(true)
}

pub fn handle_defaults() -> Result<()> {
    let yaml = serde_yaml::to_string(DEFAULTS.as_value()).context("failed to render defaults")?;
    print!("{}", yaml);
    Ok(())
}
