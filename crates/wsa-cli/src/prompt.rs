//! Interactive prompts for values missing from the command line.
//!
//! Prompts only run when stdin is a terminal and `--yes` was not passed;
//! otherwise a missing `--name` is a user error and a missing `--dir`
//! falls back to the current directory.

use std::io::IsTerminal as _;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{CliError, CliResult};

/// Whether prompts may be shown for this invocation.
pub fn can_prompt(yes: bool) -> bool {
    !yes && cfg!(feature = "interactive") && std::io::stdin().is_terminal()
}

/// Resolve the module name, prompting when allowed.
pub fn module_name(given: Option<String>, interactive: bool) -> CliResult<String> {
    match given {
        Some(name) => Ok(name),
        None if interactive => ask("Name of the module", None),
        None => Err(CliError::MissingOption { option: "name" }),
    }
}

/// Resolve the parent directory, prompting with the current directory as the
/// default when allowed.
pub fn module_root(given: Option<PathBuf>, interactive: bool) -> CliResult<PathBuf> {
    if let Some(dir) = given {
        return Ok(dir);
    }
    let cwd = std::env::current_dir()?;
    if !interactive {
        debug!(dir = %cwd.display(), "No --dir given, using current directory");
        return Ok(cwd);
    }
    let answer = ask(
        "Directory where the module should be created",
        Some(cwd.display().to_string()),
    )?;
    Ok(PathBuf::from(answer))
}

#[cfg(feature = "interactive")]
fn ask(prompt: &str, default: Option<String>) -> CliResult<String> {
    let mut input = dialoguer::Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default);
    }
    input.interact_text().map_err(|e| CliError::PromptFailed {
        message: e.to_string(),
    })
}

#[cfg(not(feature = "interactive"))]
fn ask(prompt: &str, _default: Option<String>) -> CliResult<String> {
    Err(CliError::PromptFailed {
        message: format!("'{prompt}' needs an answer but prompts are disabled in this build"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_name_is_used_verbatim() {
        assert_eq!(module_name(Some("widget".into()), false).unwrap(), "widget");
    }

    #[test]
    fn missing_name_without_prompt_is_an_error() {
        assert!(matches!(
            module_name(None, false),
            Err(CliError::MissingOption { option: "name" })
        ));
    }

    #[test]
    fn missing_dir_without_prompt_uses_cwd() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(module_root(None, false).unwrap(), cwd);
    }

    #[test]
    fn given_dir_is_used_verbatim() {
        assert_eq!(
            module_root(Some(PathBuf::from("/tmp/x")), false).unwrap(),
            PathBuf::from("/tmp/x")
        );
    }

    #[test]
    fn yes_disables_prompts() {
        assert!(!can_prompt(true));
    }
}
