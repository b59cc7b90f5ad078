//! Infrastructure layer - external I/O adapters
//!
//! This module contains all code that talks to the outside world:
//! - Azure CLI (`az container show`)
//! - Arbitrary status query commands

pub mod azure;
pub mod command;
pub mod probe;

// Re-export commonly used types
pub use azure::AzureCliProbe;
pub use command::CommandProbe;
pub use probe::{ensure_program_available, ConfiguredProbe, StatusProbe};
