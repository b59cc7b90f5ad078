pub mod probe;
pub mod validate;
pub mod wait;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::TargetArgs;
use crate::config::{GateConfig, ProbeConfig};

/// Build the effective config: file values first, then flag/env overrides
pub(crate) fn resolve_config(target: &TargetArgs) -> Result<GateConfig> {
    let mut config = match &target.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            GateConfig::load(path).context("Failed to load gate configuration")?
        }
        None => GateConfig::default(),
    };

    if let Some(ref name) = target.name {
        config.workload.name = Some(name.clone());
    }
    if let Some(ref resource_group) = target.resource_group {
        config.workload.resource_group = Some(resource_group.clone());
    }

    match &mut config.probe {
        ProbeConfig::AzureCli {
            subscription,
            container,
            ..
        } => {
            if target.subscription.is_some() {
                *subscription = target.subscription.clone();
            }
            if target.container.is_some() {
                *container = target.container.clone();
            }
        }
        ProbeConfig::Command { .. } => {
            if target.subscription.is_some() || target.container.is_some() {
                warn!("--subscription/--container only apply to the azure-cli probe, ignoring");
            }
        }
    }

    Ok(config)
}
