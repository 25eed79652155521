use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are cloneable and carry enough context to build suggestions
/// for the CLI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    #[error("Invalid template variant '{variant}': {reason}")]
    InvalidTemplateVariant { variant: String, reason: String },

    #[error("Failed to serialise site-config: {0}")]
    SiteConfigSerialization(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidModuleName { name, reason } => vec![
                format!("Module name '{name}' is invalid: {reason}"),
                "The name is used verbatim as a directory and file name".into(),
                "Examples: widget, hero-banner, site_footer".into(),
            ],
            Self::InvalidTemplateVariant { variant, reason } => vec![
                format!("Template '{variant}' is invalid: {reason}"),
                "The template becomes part of the HTML file name: <name>-<template>.html".into(),
            ],
            Self::SiteConfigSerialization(_) => {
                vec!["This is unexpected; please report it with the command you ran".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidModuleName { .. }
            | Self::InvalidTemplateVariant { .. } => ErrorCategory::Validation,
            Self::SiteConfigSerialization(_) => ErrorCategory::Internal,
        }
    }
}
