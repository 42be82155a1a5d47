use std::io::{IsTerminal, stdin, stdout};

use anyhow::{Result, anyhow};
use clap::{CommandFactory, ValueEnum};
use clap_complete::Shell;
use dialoguer::{Select, theme::ColorfulTheme};

use crate::args::Cli;
use crate::ui::interaction::prompt_or_cancel;

pub fn run(shell: Option<Shell>) -> Result<()> {
    let shell = match shell {
        Some(shell) => shell,
        None if stdout().is_terminal() && stdin().is_terminal() => pick_shell()?,
        None => {
            return Err(anyhow!(
                "shell required in non-interactive mode; pass urltool completions <shell>"
            ));
        }
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin_name, &mut stdout().lock());
    Ok(())
}

fn pick_shell() -> Result<Shell> {
    let shells = Shell::value_variants();
    let labels: Vec<String> = shells.iter().map(ToString::to_string).collect();
    let default = shells
        .iter()
        .position(|s| *s == Shell::Zsh)
        .unwrap_or_default();
    let idx = prompt_or_cancel(
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select shell for completion script")
            .items(&labels)
            .default(default)
            .interact(),
    )?;
    Ok(shells[idx])
}
