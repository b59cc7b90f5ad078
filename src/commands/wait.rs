use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

use crate::cli::TargetArgs;
use crate::commands::resolve_config;
use crate::error::ConfigError;
use crate::infrastructure::{ensure_program_available, StatusProbe};
use crate::observability::{emit_event, WaitEvent};
use crate::services::ReadinessWaiter;
use crate::ui;

pub async fn execute(
    target: TargetArgs,
    timeout: Option<Duration>,
    interval: Option<Duration>,
    events: bool,
) -> Result<()> {
    let mut config = resolve_config(&target)?;

    if let Some(timeout) = timeout {
        config.wait.timeout_secs = whole_seconds(timeout, "timeout")?;
    }
    if let Some(interval) = interval {
        config.wait.interval_secs = whole_seconds(interval, "interval")?;
    }
    let events = events || config.events;

    config.validate().context("Configuration validation failed")?;

    let workload = config.workload_ref()?;
    let waiter = ReadinessWaiter::with_policy(config.wait.policy());
    let policy = *waiter.policy();
    let probe = config.probe.build();

    let program = ensure_program_available(probe.program())?;
    info!("Using status query program: {}", program.display());

    ui::print_header("Migration Gate", &workload.to_string());
    ui::print_details(&[
        ("Probe", config.probe.kind().to_string()),
        ("Timeout", format!("{}s", policy.timeout.as_secs())),
        (
            "Interval",
            format!("{}s (at most {} polls)", policy.interval.as_secs(), policy.max_polls()),
        ),
    ]);
    println!();

    if events {
        emit_event(WaitEvent::started(&workload, &policy, config.probe.kind()));
    }

    let spinner = ui::wait_spinner(format!("Waiting for {} to report an exit code...", workload));
    let report = waiter.wait(&probe, &workload).await;
    spinner.finish_and_clear();

    if events {
        emit_event(WaitEvent::finished(&workload, &policy, &report));
    }

    if report.probe_errors > 0 {
        ui::print_warning(&format!(
            "{} of {} status queries failed and were treated as still running",
            report.probe_errors, report.polls
        ));
    }

    match report.into_result(&workload, &policy) {
        Ok(report) => {
            ui::print_success(&format!(
                "Workload '{}' completed successfully ({} polls, {:.0}s)",
                workload.name,
                report.polls,
                report.elapsed.as_secs_f64()
            ));
            Ok(())
        }
        Err(e) => {
            ui::print_error(&e.to_string());
            Err(e.into())
        }
    }
}

/// Flags accept human durations but the wait budget is kept in whole seconds
fn whole_seconds(duration: Duration, field: &str) -> Result<u64, ConfigError> {
    if duration.subsec_nanos() != 0 || duration.as_secs() == 0 {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            value: humantime::format_duration(duration).to_string(),
        });
    }
    Ok(duration.as_secs())
}
