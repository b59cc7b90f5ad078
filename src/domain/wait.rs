//! Wait policy and outcome types

use std::time::Duration;

use crate::error::WaitError;

use super::workload::WorkloadRef;

/// Default total wait budget
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Default delay between status queries
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

/// How long to wait and how often to ask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitPolicy {
    /// Total wait budget
    pub timeout: Duration,
    /// Delay between status queries
    pub interval: Duration,
}

impl WaitPolicy {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    /// Upper bound on the number of queries this policy allows
    pub fn max_polls(&self) -> u64 {
        let interval = self.interval.as_millis().max(1);
        self.timeout.as_millis().div_ceil(interval) as u64
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_INTERVAL,
        }
    }
}

/// Terminal state of a wait
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The workload exited with code 0
    Succeeded,
    /// The workload exited with a non-zero code
    Failed { exit_code: i32 },
    /// The budget ran out before any exit code was reported
    TimedOut {
        /// Last raw status text seen, if any query returned output
        last_seen: Option<String>,
    },
}

impl WaitOutcome {
    pub fn from_exit_code(exit_code: i32) -> Self {
        if exit_code == 0 {
            Self::Succeeded
        } else {
            Self::Failed { exit_code }
        }
    }
}

/// Result of a wait, with enough detail for summaries and events
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitReport {
    pub outcome: WaitOutcome,
    /// Number of status queries made
    pub polls: u32,
    /// Number of queries that errored and were treated as pending
    pub probe_errors: u32,
    /// Time spent waiting
    pub elapsed: Duration,
}

impl WaitReport {
    /// Convert a failed or timed out wait into the fatal error
    pub fn into_result(self, workload: &WorkloadRef, policy: &WaitPolicy) -> Result<Self, WaitError> {
        match &self.outcome {
            WaitOutcome::Succeeded => Ok(self),
            WaitOutcome::Failed { exit_code } => Err(WaitError::WorkloadFailed {
                workload: workload.name.clone(),
                exit_code: *exit_code,
            }),
            WaitOutcome::TimedOut { last_seen } => Err(WaitError::TimedOut {
                workload: workload.name.clone(),
                timeout_secs: policy.timeout.as_secs(),
                last_seen: match last_seen.as_deref() {
                    Some("") | None => "none observed".to_string(),
                    Some(raw) => raw.to_string(),
                },
            }),
        }
    }
}
