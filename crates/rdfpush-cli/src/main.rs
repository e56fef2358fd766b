//! RDFPush CLI - Main entry point

use clap::Parser;
use rdfpush_cli::{Cli, Commands};
use rdfpush_common::logging::{init_logging, LogConfig, LogLevel};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging: environment wins, otherwise the verbose flag
    // decides between debug and quiet console output
    let mut log_config = LogConfig::from_env().unwrap_or_default();
    if std::env::var("LOG_LEVEL").is_err() {
        log_config.level = if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        };
    }

    // Initialize logging (ignore errors as the CLI should work without it)
    let _ = init_logging(&log_config);

    // Execute command
    let result = match cli.command {
        Commands::Upload(args) => rdfpush_cli::commands::upload::run(args, cli.verbose).await,
    };

    // Handle result
    if let Err(e) = result {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
