//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand, `mkwsa` scaffolds a module using [`GenerateArgs`].
#[derive(Debug, Parser)]
#[command(
    name    = "mkwsa",
    bin_name = "mkwsa",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create a web-standard-app module skeleton",
    args_conflicts_with_subcommands = true,
    long_about = "mkwsa creates the directory layout for a web-standard-app module \
                  (templates, static CSS/JS, site configuration) and writes the \
                  boilerplate files that go with it.",
    after_help = "EXAMPLES:\n\
        \x20 mkwsa --dir ./apps --name widget\n\
        \x20 mkwsa --dir /tmp/x --name widget --config-version 3 --template hero\n\
        \x20 mkwsa --name footer --no-js --profile minimal\n\
        \x20 mkwsa completions bash > /usr/share/bash-completion/completions/mkwsa",
)]
pub struct Cli {
    /// Flags available everywhere.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Module options, used when no subcommand is given.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Optional auxiliary subcommand.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// Auxiliary subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise an mkwsa configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 mkwsa init           # user config location\n\
            \x20 mkwsa init --local   # .mkwsa.toml in the current directory"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mkwsa completions bash > ~/.local/share/bash-completion/completions/mkwsa\n\
            \x20 mkwsa completions zsh  > ~/.zfunc/_mkwsa\n\
            \x20 mkwsa completions fish > ~/.config/fish/completions/mkwsa.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mkwsa config get defaults.template\n\
            \x20 mkwsa config list\n\
            \x20 mkwsa config path"
    )]
    Config(ConfigCommands),
}

// ── generate (default) ────────────────────────────────────────────────────────

/// Options for scaffolding a module.
///
/// Everything is optional at the clap level: missing values fall back to the
/// configuration file, then to built-in defaults, and `--name` / `--dir` are
/// prompted for on a terminal.
#[derive(Debug, Default, Args)]
pub struct GenerateArgs {
    /// Directory in which the module directory is created.
    #[arg(
        long = "dir",
        value_name = "DIR",
        help = "Directory where the module should be created [default: current directory]"
    )]
    pub dir: Option<PathBuf>,

    /// Module name, used verbatim in paths and generated files.
    #[arg(long = "name", value_name = "NAME", help = "Name of the module")]
    pub name: Option<String>,

    #[arg(
        long = "js",
        overrides_with = "no_js",
        help = "Create the JS modules directory and template [default]"
    )]
    pub js: bool,

    #[arg(long = "no-js", overrides_with = "js", help = "Skip the JS template")]
    pub no_js: bool,

    #[arg(
        long = "css",
        overrides_with = "no_css",
        help = "Create the CSS modules directory and template [default]"
    )]
    pub css: bool,

    #[arg(long = "no-css", overrides_with = "css", help = "Skip the CSS template")]
    pub no_css: bool,

    /// `version` written to the site-config JSON. Any integer.
    #[arg(
        long = "config-version",
        value_name = "INT",
        allow_negative_numbers = true,
        help = "Version stored in the site-config JSON [default: 2]"
    )]
    pub config_version: Option<i64>,

    /// Suffix of the HTML template file: `<name>-<template>.html`.
    #[arg(
        long = "template",
        value_name = "TEMPLATE",
        help = "Template type [default: primary]"
    )]
    pub template: Option<String>,

    /// Proceed even if the module directory already exists.
    #[arg(
        long = "force",
        help = "Overwrite the module setup if the directory already exists"
    )]
    pub force: bool,

    /// Which boilerplate files to write.
    #[arg(
        long = "profile",
        value_enum,
        value_name = "PROFILE",
        help = "File set to write [default: assets]"
    )]
    pub profile: Option<ProfileArg>,

    /// Put `path` / `css` inside the module's own `siteModules` entry.
    #[arg(
        long = "nested-site-modules",
        help = "Nest path/css entries under the module name in the site-config"
    )]
    pub nested_site_modules: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Never prompt; use defaults for anything not given.
    #[arg(short = 'y', long = "yes", help = "Do not prompt for missing values")]
    pub yes: bool,
}

impl GenerateArgs {
    /// `Some(true)` for `--js`, `Some(false)` for `--no-js`, `None` if neither.
    pub fn js_flag(&self) -> Option<bool> {
        toggle(self.js, self.no_js)
    }

    /// Same as [`Self::js_flag`] for `--css` / `--no-css`.
    pub fn css_flag(&self) -> Option<bool> {
        toggle(self.css, self.no_css)
    }
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// File set selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProfileArg {
    /// Python package stub, JS and CSS templates.
    Assets,
    /// Directories, HTML stub and site-config only.
    Minimal,
}

impl std::fmt::Display for ProfileArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assets => write!(f, "assets"),
            Self::Minimal => write!(f, "minimal"),
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `mkwsa init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.mkwsa.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mkwsa completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `mkwsa config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.template`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
