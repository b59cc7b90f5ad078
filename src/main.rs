//! migration-gate
//!
//! Blocks a provisioning pipeline until a one-shot workload (a database
//! migration container) reports an exit code, then converts a non-zero code
//! or a timeout into a failed run.

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod infrastructure;
mod observability;
mod services;
mod ui;
mod validation;

use cli::{Cli, Commands};
use commands::{probe, validate, wait};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with LOGGING env var support
    // LOGGING=debug,info,warn,error or just LOGGING=debug
    let log_level = std::env::var("LOGGING")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .unwrap_or_else(|_| {
            if cli.verbose {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false)
        .init();

    let result = match cli.command {
        Commands::Wait {
            target,
            timeout,
            interval,
            events,
        } => wait::execute(target, timeout, interval, events).await,
        Commands::Probe { target } => probe::execute(target).await,
        Commands::Validate { config } => validate::execute(config).await,
    };

    // Every failure, including a failed or timed-out workload, exits with 1
    if let Err(ref e) = result {
        tracing::error!("migration-gate failed: {:#}", e);
    }

    result
}
