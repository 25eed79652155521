//! wsa-core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `mkwsa`, the
//! web-standard-app module scaffolding tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             wsa-cli (mkwsa)             │
//! │       (prompts, config, rendering)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │             (ScaffoldService)           │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │      (Filesystem, ProgressReporter)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     wsa-adapters (Infrastructure)       │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ModuleName, ModuleLayout, SiteConfig)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wsa_core::prelude::*;
//!
//! let request = ScaffoldRequest::new("/tmp/x", ModuleName::try_new("widget")?)
//!     .with_config_version(3)
//!     .with_template(TemplateVariant::try_new("hero")?);
//!
//! let service = ScaffoldService::new(Box::new(filesystem));
//! let outcome = service.generate(&request, &reporter)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOutcome, ScaffoldPlan, ScaffoldReport, ScaffoldService,
        ports::{Filesystem, NullReporter, ProgressReporter, ScaffoldEvent},
    };
    pub use crate::domain::{
        ModuleLayout, ModuleName, Profile, ScaffoldRequest, SiteConfig, SiteModulesLayout,
        TemplateVariant,
    };
    pub use crate::error::{WsaError, WsaResult};
}
