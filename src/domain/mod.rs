//! Domain layer - pure wait logic
//!
//! This module contains the workload, status and outcome types with no
//! external I/O. Types and functions here can be unit tested without mocking.

pub mod status;
pub mod wait;
pub mod workload;

// Re-export commonly used types
pub use status::ProbeStatus;
pub use wait::{WaitOutcome, WaitPolicy, WaitReport};
pub use workload::WorkloadRef;
