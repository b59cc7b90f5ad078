use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::config::GateConfig;
use crate::ui;

pub async fn execute(config_path: PathBuf) -> Result<()> {
    info!("Validating configuration: {}", config_path.display());

    let config = GateConfig::load(&config_path)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration: {}", config_path.display()))?;

    let workload = config.workload_ref()?;
    let policy = config.wait.policy();

    ui::print_success("Configuration is valid");
    ui::print_details(&[
        ("Workload", workload.name),
        ("Resource group", workload.resource_group),
        ("Probe", config.probe.kind().to_string()),
        ("Timeout", format!("{}s", policy.timeout.as_secs())),
        (
            "Interval",
            format!("{}s (at most {} polls)", policy.interval.as_secs(), policy.max_polls()),
        ),
        ("Events", config.events.to_string()),
    ]);

    Ok(())
}
