use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "migration-gate")]
#[command(
    about = "Block a provisioning run until a one-shot migration workload finishes",
    long_about = "Polls the exit code of a one-shot workload (such as a Flyway migration running in \
    Azure Container Instances) until it reports one, then exits 0 on success or 1 on a non-zero \
    exit code or timeout."
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Wait for the workload to report an exit code
    Wait {
        #[command(flatten)]
        target: TargetArgs,

        /// Total wait budget (e.g. 300s, 5m)
        #[arg(long, env = "WAIT_TIMEOUT", value_parser = humantime::parse_duration)]
        timeout: Option<Duration>,

        /// Delay between status queries (e.g. 10s)
        #[arg(long, env = "WAIT_INTERVAL", value_parser = humantime::parse_duration)]
        interval: Option<Duration>,

        /// Emit structured JSON events on stdout
        #[arg(long)]
        events: bool,
    },

    /// Query the workload status once and print it
    Probe {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Validate a config file and print the resolved settings
    Validate {
        /// Path to YAML config file
        #[arg(long, env = "MIGRATION_GATE_CONFIG")]
        config: PathBuf,
    },
}

/// Workload and probe selection shared by `wait` and `probe`
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Path to YAML config file
    #[arg(long, env = "MIGRATION_GATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Container group name
    #[arg(short, long, env = "WORKLOAD_NAME")]
    pub name: Option<String>,

    /// Resource group of the container group
    #[arg(short = 'g', long, env = "WORKLOAD_RESOURCE_GROUP")]
    pub resource_group: Option<String>,

    /// Azure subscription (azure-cli probe only)
    #[arg(long, env = "AZURE_SUBSCRIPTION_ID")]
    pub subscription: Option<String>,

    /// Container within the group (azure-cli probe only)
    #[arg(long)]
    pub container: Option<String>,
}
