//! Generic command status probe
//!
//! Runs any program whose stdout is the workload's exit code (or empty while
//! it is still running). Arguments may reference `{name}` and
//! `{resource_group}`, which are substituted per query.

use crate::domain::WorkloadRef;
use crate::error::ProbeError;

use super::probe::{run_query, StatusProbe};

/// Probe backed by an arbitrary command template
#[derive(Debug, Clone)]
pub struct CommandProbe {
    program: String,
    args: Vec<String>,
}

impl CommandProbe {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Arguments with workload placeholders substituted
    pub fn render_args(&self, workload: &WorkloadRef) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{name}", &workload.name)
                    .replace("{resource_group}", &workload.resource_group)
            })
            .collect()
    }
}

impl StatusProbe for CommandProbe {
    async fn read_status(&self, workload: &WorkloadRef) -> Result<String, ProbeError> {
        run_query(&self.program, &self.render_args(workload)).await
    }

    fn program(&self) -> &str {
        &self.program
    }

    fn describe(&self, workload: &WorkloadRef) -> String {
        format!("{} {}", self.program, self.render_args(workload).join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload() -> WorkloadRef {
        WorkloadRef::new("flyway-migrate", "rg-app-dev")
    }

    #[test]
    fn test_render_args_substitutes_placeholders() {
        let probe = CommandProbe::new(
            "kubectl",
            vec![
                "get".to_string(),
                "job/{name}".to_string(),
                "-n".to_string(),
                "{resource_group}".to_string(),
            ],
        );
        assert_eq!(
            probe.render_args(&workload()),
            vec!["get", "job/flyway-migrate", "-n", "rg-app-dev"]
        );
        assert_eq!(
            probe.describe(&workload()),
            "kubectl get job/flyway-migrate -n rg-app-dev"
        );
    }

    #[tokio::test]
    async fn test_read_status_runs_command() {
        let probe = CommandProbe::new(
            "sh",
            vec!["-c".to_string(), "printf '%s' 0".to_string()],
        );
        assert_eq!(probe.read_status(&workload()).await.unwrap(), "0");
    }

    #[tokio::test]
    async fn test_read_status_passes_workload_to_command() {
        let probe = CommandProbe::new(
            "sh",
            vec!["-c".to_string(), "echo {name}@{resource_group}".to_string()],
        );
        assert_eq!(
            probe.read_status(&workload()).await.unwrap(),
            "flyway-migrate@rg-app-dev"
        );
    }
}
