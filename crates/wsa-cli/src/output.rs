//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::warn;

use wsa_core::application::{ProgressReporter, ScaffoldEvent};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format` from the config; `auto`
    /// in either place resolves to Human on a TTY and Plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => config
                .output
                .format
                .parse::<OutputFormat>()
                .unwrap_or_else(|e| {
                    warn!(format = %config.output.format, "Ignoring output.format: {e}");
                    OutputFormat::Auto
                }),
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet and JSON modes.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.suppressed() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.decorated("\u{2713}", msg, |s| s.green().bold().to_string(), |m| {
            m.green().to_string()
        })
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.decorated("\u{26a0}", msg, |s| s.yellow().bold().to_string(), |m| {
            m.yellow().to_string()
        })
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.decorated("\u{2139}", msg, |s| s.blue().bold().to_string(), |m| {
            m.blue().to_string()
        })
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.suppressed() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty JSON document on stdout.  Always written, even with `--quiet`,
    /// since it is the command's result rather than commentary.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    fn decorated(
        &self,
        symbol: &str,
        msg: &str,
        paint_symbol: impl Fn(&str) -> String,
        paint_msg: impl Fn(&str) -> String,
    ) -> io::Result<()> {
        if self.suppressed() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {}", paint_symbol(symbol), paint_msg(msg))
        };
        self.term.write_line(&line)
    }

    fn suppressed(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    /// Adapter turning scaffold events into status lines.
    pub fn reporter(&self) -> ConsoleReporter<'_> {
        ConsoleReporter { output: self }
    }
}

/// [`ProgressReporter`] that prints one status line per scaffold step.
pub struct ConsoleReporter<'a> {
    output: &'a OutputManager,
}

impl ConsoleReporter<'_> {
    /// The status line for `event`, without decoration.
    pub fn message(event: &ScaffoldEvent<'_>) -> String {
        match event {
            ScaffoldEvent::Started { name, root } => {
                format!("Creating module named {name} in {} ...", root.display())
            }
            ScaffoldEvent::AlreadyExists { .. } => {
                "Directory already exists, use --force option to overwrite module setup settings"
                    .to_string()
            }
            ScaffoldEvent::DirectoryFound(dir) => {
                format!("Found {}, skipping folder creation", dir.display())
            }
            ScaffoldEvent::CreatingDirectory(dir) => format!("Creating {} ...", dir.display()),
            ScaffoldEvent::WritingFile { file, dir } => format!(
                "Creating {} file in {} ...",
                file.file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_default(),
                dir.display()
            ),
            ScaffoldEvent::Finished { module_dir } => {
                format!("Module created at {}", module_dir.display())
            }
        }
    }
}

impl ProgressReporter for ConsoleReporter<'_> {
    fn report(&self, event: &ScaffoldEvent<'_>) {
        let msg = Self::message(event);
        let written = match event {
            ScaffoldEvent::AlreadyExists { .. } => self.output.warning(&msg),
            ScaffoldEvent::Finished { .. } => self.output.success(&msg),
            _ => self.output.print(&msg),
        };
        if let Err(e) = written {
            warn!(error = %e, "Failed to write progress line");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use wsa_core::domain::ModuleName;

    use super::*;
    use crate::config::AppConfig;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
            log_file: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn no_color_flag_reported() {
        let colored = make_manager(false, false, OutputFormat::Human);
        let no_color = make_manager(false, true, OutputFormat::Human);
        assert!(!colored.no_color);
        assert!(no_color.no_color);
    }

    #[test]
    fn plain_format_disables_color() {
        assert!(make_manager(false, false, OutputFormat::Plain).no_color);
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert_eq!(out.format(), OutputFormat::Json);
    }

    #[test]
    fn config_format_applies_when_flag_is_auto() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
            log_file: None,
        };
        let mut cfg = AppConfig::default();
        cfg.output.format = "json".into();
        assert_eq!(OutputManager::new(&args, &cfg).format(), OutputFormat::Json);
    }

    #[test]
    fn messages_match_progress_wording() {
        let name = ModuleName::try_new("widget").unwrap();
        let root = Path::new("/tmp/x");
        assert_eq!(
            ConsoleReporter::message(&ScaffoldEvent::Started { name: &name, root }),
            "Creating module named widget in /tmp/x ..."
        );
        assert_eq!(
            ConsoleReporter::message(&ScaffoldEvent::DirectoryFound(Path::new("/tmp/x/widget"))),
            "Found /tmp/x/widget, skipping folder creation"
        );
        assert_eq!(
            ConsoleReporter::message(&ScaffoldEvent::CreatingDirectory(Path::new("/a"))),
            "Creating /a ..."
        );
        assert_eq!(
            ConsoleReporter::message(&ScaffoldEvent::WritingFile {
                file: Path::new("/a/widget.css"),
                dir: Path::new("/a"),
            }),
            "Creating widget.css file in /a ..."
        );
    }
}
