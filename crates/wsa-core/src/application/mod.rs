//! Application layer for wsa-core.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ScaffoldService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer sequences the domain layer's pure computations
//! against the ports; it owns ordering, not path or content rules.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ScaffoldOutcome, ScaffoldPlan, ScaffoldReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProgressReporter, ScaffoldEvent};

pub use error::ApplicationError;
