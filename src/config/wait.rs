//! Wait budget settings

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::WaitPolicy;
use crate::validation::validate_numeric_range;

/// Wait budget and poll interval, in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitSettings {
    /// Total wait budget in seconds (default: 300, range: 1-86400)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Delay between status queries in seconds (default: 10, range: 1-3600)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

impl WaitSettings {
    /// Validate values are within reasonable bounds
    pub fn validate(&self) -> Result<()> {
        validate_numeric_range(self.timeout_secs, "timeout_secs", 1, 86_400)?;
        validate_numeric_range(self.interval_secs, "interval_secs", 1, 3_600)?;
        Ok(())
    }

    pub fn policy(&self) -> WaitPolicy {
        WaitPolicy::new(
            Duration::from_secs(self.timeout_secs),
            Duration::from_secs(self.interval_secs),
        )
    }
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_interval_secs() -> u64 {
    10
}

impl Default for WaitSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            interval_secs: default_interval_secs(),
        }
    }
}
