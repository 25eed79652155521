//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` turns a `ScaffoldRequest` into directories and files.

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldOutcome, ScaffoldPlan, ScaffoldReport, ScaffoldService};
