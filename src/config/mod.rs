//! Configuration for migration-gate
//!
//! Settings come from an optional YAML file, overridden by CLI flags and
//! environment variables (see `cli.rs`).

pub mod probe;
pub mod wait;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::WorkloadRef;
use crate::error::ConfigError;
use crate::validation::{validate_container_group_name, validate_resource_group_name};

pub use probe::ProbeConfig;
pub use wait::WaitSettings;

/// Complete gate configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateConfig {
    /// Workload to wait for
    #[serde(default)]
    pub workload: WorkloadConfig,

    /// How to query the workload status
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Wait budget and poll interval
    #[serde(default)]
    pub wait: WaitSettings,

    /// Emit structured JSON events on stdout
    #[serde(default)]
    pub events: bool,
}

/// Workload identity as written in config
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Container group name
    pub name: Option<String>,

    /// Resource group name
    pub resource_group: Option<String>,
}

impl GateConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read configuration file: {}. Ensure the file is readable.",
                path.display()
            )
        })?;

        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }

    /// Resolve the workload reference, failing on missing fields
    pub fn workload_ref(&self) -> Result<WorkloadRef, ConfigError> {
        let name = self
            .workload
            .name
            .clone()
            .ok_or_else(|| ConfigError::MissingField {
                field: "workload.name".to_string(),
            })?;
        let resource_group =
            self.workload
                .resource_group
                .clone()
                .ok_or_else(|| ConfigError::MissingField {
                    field: "workload.resource_group".to_string(),
                })?;

        Ok(WorkloadRef::new(name, resource_group))
    }

    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        let workload = self.workload_ref()?;

        validate_container_group_name(&workload.name, "workload.name")
            .context("Invalid workload name")?;
        validate_resource_group_name(&workload.resource_group, "workload.resource_group")
            .context("Invalid resource group name")?;

        self.wait.validate().context("Wait settings validation failed")?;
        self.probe.validate().context("Probe configuration validation failed")?;

        Ok(())
    }
}
