//! # Wait Observability Module
//!
//! Structured events for pipeline log collectors.
//!
//! ## Event Flow
//!
//! ```text
//! migration-gate → JSON stdout → log shipper → dashboards
//! ```
//!
//! Events are single JSON lines prefixed with `MIGRATION_GATE_EVENT:` so they
//! can be picked out of mixed pipeline output. Enable with `--events` or
//! `events: true` in the config file.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{WaitOutcome, WaitPolicy, WaitReport, WorkloadRef};

/// Event prefix for collectors to identify structured events
const EVENT_PREFIX: &str = "MIGRATION_GATE_EVENT:";

/// Wait event types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum WaitEvent {
    /// Polling started
    WaitStarted(WaitStartedEvent),
    /// Workload exited with code 0
    WaitSucceeded(WaitFinishedEvent),
    /// Workload exited with a non-zero code
    WaitFailed(WaitFailedEvent),
    /// No exit code within the budget
    WaitTimedOut(WaitTimedOutEvent),
}

/// Common fields for all events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Timestamp in RFC3339 format
    pub timestamp: String,
    /// Workload (container group) name
    pub workload: String,
    /// Resource group
    pub resource_group: String,
    /// Hostname of the machine running the wait
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// CI job ID if running in CI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ci_job_id: Option<String>,
}

impl EventMetadata {
    pub fn new(workload: &WorkloadRef) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            workload: workload.name.clone(),
            resource_group: workload.resource_group.clone(),
            hostname: std::env::var("HOSTNAME").ok(),
            ci_job_id: std::env::var("GITHUB_RUN_ID")
                .ok()
                .or_else(|| std::env::var("BUILD_BUILDID").ok())
                .or_else(|| std::env::var("CI_JOB_ID").ok()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitStartedEvent {
    #[serde(flatten)]
    pub metadata: EventMetadata,
    pub timeout_secs: u64,
    pub interval_secs: u64,
    /// Probe kind (azure-cli, command)
    pub probe: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitFinishedEvent {
    #[serde(flatten)]
    pub metadata: EventMetadata,
    pub duration_secs: f64,
    pub polls: u32,
    pub probe_errors: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitFailedEvent {
    #[serde(flatten)]
    pub metadata: EventMetadata,
    pub exit_code: i32,
    pub duration_secs: f64,
    pub polls: u32,
    pub probe_errors: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitTimedOutEvent {
    #[serde(flatten)]
    pub metadata: EventMetadata,
    pub timeout_secs: u64,
    pub polls: u32,
    pub probe_errors: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
}

impl WaitEvent {
    pub fn started(workload: &WorkloadRef, policy: &WaitPolicy, probe: &str) -> Self {
        Self::WaitStarted(WaitStartedEvent {
            metadata: EventMetadata::new(workload),
            timeout_secs: policy.timeout.as_secs(),
            interval_secs: policy.interval.as_secs(),
            probe: probe.to_string(),
        })
    }

    /// Build the terminal event for a finished wait
    pub fn finished(workload: &WorkloadRef, policy: &WaitPolicy, report: &WaitReport) -> Self {
        let metadata = EventMetadata::new(workload);
        let duration_secs = report.elapsed.as_secs_f64();

        match &report.outcome {
            WaitOutcome::Succeeded => Self::WaitSucceeded(WaitFinishedEvent {
                metadata,
                duration_secs,
                polls: report.polls,
                probe_errors: report.probe_errors,
            }),
            WaitOutcome::Failed { exit_code } => Self::WaitFailed(WaitFailedEvent {
                metadata,
                exit_code: *exit_code,
                duration_secs,
                polls: report.polls,
                probe_errors: report.probe_errors,
            }),
            WaitOutcome::TimedOut { last_seen } => Self::WaitTimedOut(WaitTimedOutEvent {
                metadata,
                timeout_secs: policy.timeout.as_secs(),
                polls: report.polls,
                probe_errors: report.probe_errors,
                last_seen: last_seen.clone().filter(|s| !s.is_empty()),
            }),
        }
    }

    /// Render as a prefixed JSON line
    pub fn to_line(&self) -> serde_json::Result<String> {
        Ok(format!("{}{}", EVENT_PREFIX, serde_json::to_string(self)?))
    }
}

/// Emits a structured event as JSON to stdout
pub fn emit_event(event: WaitEvent) {
    match event.to_line() {
        Ok(line) => {
            println!("{}", line);
        }
        Err(e) => {
            tracing::error!("Failed to serialize event: {}", e);
        }
    }
}
