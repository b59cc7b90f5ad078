//! Workload identity

use std::fmt;

/// Identifies the one-shot workload being observed
///
/// The waiter only ever reads this; it is passed by shared reference to
/// every status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadRef {
    /// Container group name
    pub name: String,
    /// Resource group the container group lives in
    pub resource_group: String,
}

impl WorkloadRef {
    pub fn new(name: impl Into<String>, resource_group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_group: resource_group.into(),
        }
    }
}

impl fmt::Display for WorkloadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_group, self.name)
    }
}
