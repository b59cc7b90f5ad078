//! Azure Container Instances status probe
//!
//! Reads the exit code of a container group's container via the Azure CLI:
//!
//! ```text
//! az container show --name <name> --resource-group <rg> \
//!     --query containers[0].instanceView.currentState.exitCode --output tsv
//! ```
//!
//! While the container is running the query prints nothing (tsv renders
//! `null` as an empty line).

use crate::domain::WorkloadRef;
use crate::error::ProbeError;

use super::probe::{run_query, StatusProbe};

/// Default Azure CLI binary
pub const DEFAULT_AZ_BINARY: &str = "az";

/// Probe backed by `az container show`
#[derive(Debug, Clone)]
pub struct AzureCliProbe {
    az_binary: String,
    subscription: Option<String>,
    container: Option<String>,
}

impl Default for AzureCliProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl AzureCliProbe {
    pub fn new() -> Self {
        Self {
            az_binary: DEFAULT_AZ_BINARY.to_string(),
            subscription: None,
            container: None,
        }
    }

    /// Builder: use a different `az` binary
    pub fn with_binary(mut self, az_binary: impl Into<String>) -> Self {
        self.az_binary = az_binary.into();
        self
    }

    /// Builder: scope queries to a subscription
    pub fn with_subscription(mut self, subscription: Option<String>) -> Self {
        self.subscription = subscription;
        self
    }

    /// Builder: read a named container instead of the first one
    pub fn with_container(mut self, container: Option<String>) -> Self {
        self.container = container;
        self
    }

    /// JMESPath query selecting the container's exit code
    pub fn exit_code_query(&self) -> String {
        match &self.container {
            Some(container) => format!(
                "containers[?name=='{}'] | [0].instanceView.currentState.exitCode",
                container
            ),
            None => "containers[0].instanceView.currentState.exitCode".to_string(),
        }
    }

    /// Full argument list for `az`
    pub fn args(&self, workload: &WorkloadRef) -> Vec<String> {
        let mut args = vec![
            "container".to_string(),
            "show".to_string(),
            "--name".to_string(),
            workload.name.clone(),
            "--resource-group".to_string(),
            workload.resource_group.clone(),
            "--query".to_string(),
            self.exit_code_query(),
            "--output".to_string(),
            "tsv".to_string(),
        ];

        if let Some(ref subscription) = self.subscription {
            args.push("--subscription".to_string());
            args.push(subscription.clone());
        }

        args
    }
}

impl StatusProbe for AzureCliProbe {
    async fn read_status(&self, workload: &WorkloadRef) -> Result<String, ProbeError> {
        run_query(&self.az_binary, &self.args(workload)).await
    }

    fn program(&self) -> &str {
        &self.az_binary
    }

    fn describe(&self, workload: &WorkloadRef) -> String {
        format!(
            "{} container show --name {} --resource-group {}",
            self.az_binary, workload.name, workload.resource_group
        )
    }
}
