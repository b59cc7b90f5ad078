//! Centralized error types for migration-gate
//!
//! Uses thiserror for typed errors that can be matched on,
//! while still being compatible with anyhow for propagation.

use thiserror::Error;

/// The workload did not report success
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitError {
    #[error("Workload '{workload}' failed with exit code {exit_code}")]
    WorkloadFailed { workload: String, exit_code: i32 },

    #[error(
        "Workload '{workload}' did not report an exit code within {timeout_secs}s (last seen: {last_seen})"
    )]
    TimedOut {
        workload: String,
        timeout_secs: u64,
        last_seen: String,
    },
}

/// Status query errors
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Failed to run status query `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Status query `{program}` exited with {code:?}: {stderr}")]
    CommandFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Unparsable workload status: '{raw}'")]
    Unparsable { raw: String },

    #[error("Status query program not found: {program}")]
    ProgramNotFound { program: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required configuration missing: {field}")]
    MissingField { field: String },

    #[error("Invalid configuration value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse config: {message}")]
    ParseError { message: String },
}
