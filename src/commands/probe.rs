use anyhow::{Context, Result};
use tracing::info;

use crate::cli::TargetArgs;
use crate::commands::resolve_config;
use crate::domain::ProbeStatus;
use crate::infrastructure::{ensure_program_available, StatusProbe};
use crate::ui;
use crate::validation::{validate_container_group_name, validate_resource_group_name};

/// Run the status query once, without waiting
pub async fn execute(target: TargetArgs) -> Result<()> {
    let config = resolve_config(&target)?;

    let workload = config.workload_ref()?;
    validate_container_group_name(&workload.name, "workload.name")?;
    validate_resource_group_name(&workload.resource_group, "workload.resource_group")?;
    config.probe.validate()?;

    let probe = config.probe.build();
    ensure_program_available(probe.program())?;

    info!("Querying status: {}", probe.describe(&workload));

    let raw = probe
        .read_status(&workload)
        .await
        .with_context(|| format!("Status query failed for {}", workload))?;

    match ProbeStatus::parse(&raw)? {
        ProbeStatus::Pending => {
            ui::print_info(&format!("Workload '{}' has no exit code yet", workload.name));
        }
        ProbeStatus::Terminal(0) => {
            ui::print_success(&format!("Workload '{}' exited with code 0", workload.name));
        }
        ProbeStatus::Terminal(code) => {
            ui::print_warning(&format!(
                "Workload '{}' exited with code {}",
                workload.name, code
            ));
        }
    }

    Ok(())
}
