//! Command-line interface.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use installer_paths::{Config, InstallPathResolver};

#[derive(Parser, Debug)]
#[command(name = "installer-paths")]
#[command(about = "Resolve framework install paths for package types", long_about = None)]
#[command(version)]
pub(crate) struct Cli {
    /// Config file (defaults to $INSTALLER_PATHS_CONFIG or the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Check whether a package type belongs to a known framework
    Supports {
        /// Package type, e.g. wordpress-plugin
        package_type: String,
    },
    /// Print the install path for a package
    Resolve {
        /// Package type, e.g. wordpress-plugin
        package_type: String,
        /// Package name as vendor/name
        package: String,
        /// Prefix the path with the host's base installation directory
        #[arg(long)]
        base_dir: Option<String>,
    },
    /// List registered frameworks and their subtypes
    Frameworks {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run a parsed command line. Returns the process exit code.
pub(crate) fn run(cli: Cli) -> Result<i32> {
    let config = match &cli.config {
        Some(path) => {
            let mut config = Config::load_from(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.apply_env();
            config
        }
        None => Config::load().with_context(|| "Failed to load configuration")?,
    };
    let resolver =
        InstallPathResolver::from_config(&config).with_context(|| "Invalid configuration")?;

    match cli.command {
        Commands::Supports { package_type } => Ok(commands::cmd_supports(&resolver, &package_type)),
        Commands::Resolve {
            package_type,
            package,
            base_dir,
        } => {
            commands::cmd_resolve(&resolver, &package_type, &package, base_dir.as_deref())?;
            Ok(0)
        }
        Commands::Frameworks { json } => {
            commands::cmd_frameworks(&resolver, json)?;
            Ok(0)
        }
    }
}
