use std::fmt;

use serde::Serialize;

use super::DomainError;

/// Why `segment` cannot be used as a single path component, if it can't.
///
/// Only filesystem legality is checked; anything the OS would accept as one
/// component is accepted here too.
fn illegal_segment_reason(segment: &str) -> Option<&'static str> {
    if segment.is_empty() {
        Some("cannot be empty")
    } else if segment == "." || segment == ".." {
        Some("cannot be '.' or '..'")
    } else if segment.contains('/') || segment.contains('\\') {
        Some("cannot contain path separators")
    } else if segment.contains('\0') {
        Some("cannot contain NUL bytes")
    } else {
        None
    }
}

/// Name of the scaffolded module.
///
/// Invariant: usable as a single path component. Used verbatim in paths and
/// in generated file contents (no escaping).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn try_new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        match illegal_segment_reason(&name) {
            Some(reason) => Err(DomainError::InvalidModuleName {
                name,
                reason: format!("name {reason}"),
            }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Suffix selecting the HTML stub file name: `<name>-<variant>.html`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TemplateVariant(String);

impl TemplateVariant {
    pub const DEFAULT: &'static str = "primary";

    pub fn try_new(variant: impl Into<String>) -> Result<Self, DomainError> {
        let variant = variant.into();
        match illegal_segment_reason(&variant) {
            Some(reason) => Err(DomainError::InvalidTemplateVariant {
                variant,
                reason: format!("template {reason}"),
            }),
            None => Ok(Self(variant)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TemplateVariant {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
