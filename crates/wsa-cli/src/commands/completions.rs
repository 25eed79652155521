//! Shell completion generation.

use std::io::Write as _;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::{CliResult, IntoCli as _},
};

const BIN_NAME: &str = "mkwsa";

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut buf = Vec::new();
    render(args.shell, &mut buf);

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&buf)
        .and_then(|()| stdout.flush())
        .with_cli_context(|| format!("Failed to write {:?} completions", args.shell))
}

fn render(shell: Shell, out: &mut Vec<u8>) {
    let mut cmd = Cli::command();
    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, BIN_NAME, out),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, BIN_NAME, out),
        Shell::Fish => generate(shells::Fish, &mut cmd, BIN_NAME, out),
        Shell::PowerShell => generate(shells::PowerShell, &mut cmd, BIN_NAME, out),
        Shell::Elvish => generate(shells::Elvish, &mut cmd, BIN_NAME, out),
    }
}
