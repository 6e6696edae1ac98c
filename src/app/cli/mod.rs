//! CLI Adapter.

mod envs;
mod extract;

use crate::domain::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jbextract")]
#[command(version)]
#[command(
    about = "Convert integration-platform project exports into readable directory trees",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one environment of a project export
    #[clap(visible_alias = "x")]
    Extract {
        /// Project root containing manifest.jip
        project: PathBuf,
        /// Directory receiving the extracted tree
        #[arg(short, long)]
        output: PathBuf,
        /// Environment directory name (prompted when omitted)
        #[arg(short, long)]
        env: Option<String>,
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Undo every filesystem change if extraction fails
        #[arg(long)]
        rollback: bool,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the environments of a project export
    #[clap(visible_alias = "e")]
    Envs {
        /// Project root containing manifest.jip
        project: PathBuf,
        /// Print the names as a JSON array
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Extract { project, output, env, config, rollback, json } => {
            extract::run(extract::ExtractArgs { project, output, env, config, rollback, json })
        }
        Commands::Envs { project, json } => envs::run(&project, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
