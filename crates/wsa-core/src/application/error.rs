//! Application layer errors.
//!
//! These errors represent failures while talking to ports, not invalid input.
//! Input errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state could not be accessed (lock poisoned, etc.).
    #[error("Adapter state unavailable: {name}")]
    AdapterLockError { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the --dir directory exists".into(),
                "Files written before the failure are left in place".into(),
            ],
            Self::AdapterLockError { name } => vec![
                format!("The {name} adapter is in an inconsistent state"),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
            Self::AdapterLockError { .. } => ErrorCategory::Internal,
        }
    }
}
