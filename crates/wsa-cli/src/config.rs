//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `MKWSA_<SECTION>__<KEY>`, e.g.
//!    `MKWSA_DEFAULTS__TEMPLATE=hero`
//! 3. `--config <FILE>` (must exist)
//! 4. `.mkwsa.toml` in the current directory (optional)
//! 5. The user config file, see [`AppConfig::config_path`] (optional)
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use wsa_core::domain::{Profile, ScaffoldRequest, TemplateVariant};

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".mkwsa.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new modules.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub js: bool,
    pub css: bool,
    pub config_version: i64,
    pub template: String,
    pub profile: Profile,
    pub nested_site_modules: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            js: true,
            css: true,
            config_version: ScaffoldRequest::DEFAULT_CONFIG_VERSION,
            template: TemplateVariant::DEFAULT.into(),
            profile: Profile::default(),
            nested_site_modules: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and the environment on top of defaults.
    ///
    /// `config_file` is the path given with `--config`; it must exist.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(Self::config_path(), Path::new(LOCAL_CONFIG_FILE), config_file)
    }

    fn load_from(
        user_file: PathBuf,
        local_file: &Path,
        explicit: Option<&PathBuf>,
    ) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(File::from(user_file.as_path()).format(FileFormat::Toml).required(false))
            .add_source(File::from(local_file).format(FileFormat::Toml).required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Using explicit configuration file");
            builder = builder.add_source(File::from(path.as_path()).format(FileFormat::Toml));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("MKWSA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mkwsa.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "wsa", "mkwsa")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
