//! Ping Log Stats CLI
//!
//! Reads a mesh ping/ack log and prints latency and loss statistics
//! per recipient and per hop count.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use ping_log_stats::commands::{
    display_version, execute_analyze, execute_entries, validate_args, AnalyzeArgs,
};
use ping_log_stats::utils::config::{DEFAULT_LOG_PATH, LOG_PATH_ENV};

/// Ping Log Stats - latency and loss statistics for ping logs
#[derive(Parser, Debug)]
#[command(name = "ping-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute and print latency, loss rate and hop count reports
    Analyze {
        /// Ping log CSV file
        #[arg(short, long, env = LOG_PATH_ENV, default_value = DEFAULT_LOG_PATH)]
        log: PathBuf,

        /// Field delimiter (single character, or "tab")
        #[arg(short, long, default_value = ",")]
        delimiter: String,

        /// Also write the report as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Print every parsed entry as a JSON line
    Entries {
        /// Ping log CSV file
        #[arg(short, long, env = LOG_PATH_ENV, default_value = DEFAULT_LOG_PATH)]
        log: PathBuf,

        /// Field delimiter (single character, or "tab")
        #[arg(short, long, default_value = ",")]
        delimiter: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            log,
            delimiter,
            json,
        } => {
            let args = AnalyzeArgs {
                log_path: log,
                delimiter,
                output_json: json,
            };

            // Validate args first
            validate_args(&args)?;

            let stdout = std::io::stdout();
            execute_analyze(args, &mut stdout.lock())?;
        }

        Commands::Entries { log, delimiter } => {
            let stdout = std::io::stdout();
            let count = execute_entries(&log, &delimiter, &mut stdout.lock())?;
            info!("Printed {} entries", count);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
