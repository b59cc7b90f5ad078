//! Status probe configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::infrastructure::azure::DEFAULT_AZ_BINARY;
use crate::infrastructure::{AzureCliProbe, CommandProbe, ConfiguredProbe};

/// Which status query to run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProbeConfig {
    /// `az container show ... --query <exitCode>`
    AzureCli {
        #[serde(default = "default_az_binary")]
        az_binary: String,

        /// Subscription to scope the query to
        #[serde(default)]
        subscription: Option<String>,

        /// Container within the group (default: first container)
        #[serde(default)]
        container: Option<String>,
    },

    /// Any program printing the exit code on stdout
    Command {
        program: String,

        /// Arguments; `{name}` and `{resource_group}` are substituted
        #[serde(default)]
        args: Vec<String>,
    },
}

fn default_az_binary() -> String {
    DEFAULT_AZ_BINARY.to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::AzureCli {
            az_binary: default_az_binary(),
            subscription: None,
            container: None,
        }
    }
}

impl ProbeConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::AzureCli {
                az_binary,
                container,
                ..
            } => {
                if az_binary.trim().is_empty() {
                    anyhow::bail!("probe.az_binary cannot be empty");
                }
                if let Some(container) = container {
                    if container.contains('\'') {
                        anyhow::bail!("probe.container cannot contain quotes: {}", container);
                    }
                }
            }
            Self::Command { program, .. } => {
                if program.trim().is_empty() {
                    anyhow::bail!("probe.program cannot be empty");
                }
            }
        }
        Ok(())
    }

    /// Build the probe adapter
    pub fn build(&self) -> ConfiguredProbe {
        match self {
            Self::AzureCli {
                az_binary,
                subscription,
                container,
            } => ConfiguredProbe::AzureCli(
                AzureCliProbe::new()
                    .with_binary(az_binary.clone())
                    .with_subscription(subscription.clone())
                    .with_container(container.clone()),
            ),
            Self::Command { program, args } => {
                ConfiguredProbe::Command(CommandProbe::new(program.clone(), args.clone()))
            }
        }
    }

    /// Short label for summaries
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AzureCli { .. } => "azure-cli",
            Self::Command { .. } => "command",
        }
    }
}
