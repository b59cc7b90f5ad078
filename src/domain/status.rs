//! Workload status as reported by a status query

use crate::error::ProbeError;

/// Values a status query prints while the workload has no exit code yet
const PENDING_SENTINELS: &[&str] = &["", "null", "none"];

/// Status observed by a single query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    /// No exit code yet, the workload is still running (or not started)
    Pending,
    /// The workload finished with this exit code
    Terminal(i32),
}

impl ProbeStatus {
    /// Parse the scalar printed by a status query
    ///
    /// Whitespace is trimmed. Empty output, `null` and `None` (any case)
    /// mean the exit code is unset. Any signed 32-bit integer is terminal.
    pub fn parse(raw: &str) -> Result<Self, ProbeError> {
        let value = raw.trim();

        if PENDING_SENTINELS.contains(&value.to_lowercase().as_str()) {
            return Ok(Self::Pending);
        }

        value
            .parse::<i32>()
            .map(Self::Terminal)
            .map_err(|_| ProbeError::Unparsable {
                raw: value.to_string(),
            })
    }
}
