//! Domain layer: everything that can be computed without touching disk.
//!
//! - [`ModuleName`] / [`TemplateVariant`]: validated path segments
//! - [`ScaffoldRequest`]: one invocation's options
//! - [`ModuleLayout`]: the directory tree derived from a request
//! - [`SiteConfig`]: the JSON site-config descriptor
//! - [`boilerplate`]: contents of the generated stub files

pub mod boilerplate;
mod error;
mod layout;
mod names;
mod request;
mod site_config;

pub use error::DomainError;
pub use layout::{FileRole, ModuleLayout, PlannedFile};
pub use names::{ModuleName, TemplateVariant};
pub use request::{Profile, ScaffoldRequest, SiteModulesLayout};
pub use site_config::SiteConfig;
