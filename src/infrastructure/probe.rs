//! Status query seam
//!
//! A probe runs the external status query for a workload and returns the raw
//! scalar it printed. Probes are read-only: they can ask about a workload but
//! expose no way to start, stop or change it.

use std::path::PathBuf;

use tokio::process::Command;
use tracing::debug;

use crate::domain::WorkloadRef;
use crate::error::ProbeError;

use super::azure::AzureCliProbe;
use super::command::CommandProbe;

/// Read-only status query for a workload
pub trait StatusProbe {
    /// Run the query once and return its trimmed output
    async fn read_status(&self, workload: &WorkloadRef) -> Result<String, ProbeError>;

    /// Program the query shells out to
    fn program(&self) -> &str;

    /// Human-readable description for logs
    fn describe(&self, workload: &WorkloadRef) -> String;
}

/// Probe selected from configuration
#[derive(Debug, Clone)]
pub enum ConfiguredProbe {
    AzureCli(AzureCliProbe),
    Command(CommandProbe),
}

impl StatusProbe for ConfiguredProbe {
    async fn read_status(&self, workload: &WorkloadRef) -> Result<String, ProbeError> {
        match self {
            Self::AzureCli(probe) => probe.read_status(workload).await,
            Self::Command(probe) => probe.read_status(workload).await,
        }
    }

    fn program(&self) -> &str {
        match self {
            Self::AzureCli(probe) => probe.program(),
            Self::Command(probe) => probe.program(),
        }
    }

    fn describe(&self, workload: &WorkloadRef) -> String {
        match self {
            Self::AzureCli(probe) => probe.describe(workload),
            Self::Command(probe) => probe.describe(workload),
        }
    }
}

/// Resolve the probe program on PATH before polling starts
pub fn ensure_program_available(program: &str) -> Result<PathBuf, ProbeError> {
    which::which(program).map_err(|_| ProbeError::ProgramNotFound {
        program: program.to_string(),
    })
}

/// Run a query command and capture its stdout
pub(crate) async fn run_query(program: &str, args: &[String]) -> Result<String, ProbeError> {
    debug!("Running status query: {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| ProbeError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ProbeError::CommandFailed {
            program: program.to_string(),
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
