//! CLI Adapter.

mod check;
mod watch;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::config::CheckOptions;
use crate::domain::{AppError, Language, Simulation};

#[derive(Parser)]
#[command(name = "projloc")]
#[command(version)]
#[command(
    about = "Check that a project lives in a portable, tooling-friendly location",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (overridden by PROJLOC_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the project location once
    #[clap(visible_alias = "c")]
    Check {
        #[command(flatten)]
        location: LocationArgs,
    },
    /// Re-check the project location on an interval
    #[clap(visible_alias = "w")]
    Watch {
        #[command(flatten)]
        location: LocationArgs,
        /// Seconds between checks
        #[arg(long, default_value_t = 5)]
        interval: u64,
        /// Stop after this many checks
        #[arg(long)]
        max_checks: Option<usize>,
    },
}

/// Arguments shared by every command that checks a location.
#[derive(Args, Debug, Clone)]
pub(crate) struct LocationArgs {
    /// Project directory (defaults to the current directory)
    path: Option<PathBuf>,
    /// Config file (defaults to projloc.toml in the project directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum accepted path length in characters
    #[arg(long)]
    max_length: Option<usize>,
    /// Message language: en or fr
    #[arg(long)]
    lang: Option<String>,
    /// Override the Desktop folder reported by the OS
    #[arg(long, value_name = "DIR")]
    desktop: Option<String>,
    /// Override the Documents folder reported by the OS
    #[arg(long, value_name = "DIR")]
    documents: Option<String>,
    /// Emit machine-readable JSON
    #[arg(long)]
    json: bool,
    /// Pretend the path exceeds the maximum length
    #[arg(long)]
    simulate_long_path: bool,
    /// Pretend the path contains accented characters
    #[arg(long)]
    simulate_accented: bool,
    /// Pretend the project sits in a cloud-synced folder (onedrive, dropbox, google, icloud)
    #[arg(long, value_name = "PROVIDER")]
    simulate_cloud: Option<String>,
    /// Pretend the project sits in the Documents folder
    #[arg(long)]
    simulate_documents: bool,
    /// Pretend the project sits on the Desktop
    #[arg(long)]
    simulate_desktop: bool,
}

impl LocationArgs {
    fn project_dir(&self) -> Result<PathBuf, AppError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    fn options(&self) -> Result<CheckOptions, AppError> {
        Ok(CheckOptions {
            config_path: self.config.clone(),
            max_length: self.max_length,
            language: self.lang.as_deref().map(Language::parse).transpose()?,
            desktop: self.desktop.clone(),
            documents: self.documents.clone(),
            simulate: Simulation {
                long_path: self.simulate_long_path,
                accented: self.simulate_accented,
                cloud: self.simulate_cloud.clone(),
                documents: self.simulate_documents,
                desktop: self.simulate_desktop,
            },
        })
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Check { location } => check::run_check(&location),
        Commands::Watch { location, interval, max_checks } => {
            watch::run_watch(&location, interval, max_checks)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
