use std::fmt;

use anyhow::Result;
use dialoguer::Input;
use dialoguer::console::Term;
use dialoguer::theme::Theme;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("cancelled by user")]
pub struct UserCancelled;

pub fn prompt_or_cancel<T>(result: dialoguer::Result<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => {
            let _ = Term::stdout().show_cursor();
            let _ = Term::stderr().show_cursor();
            match err {
                dialoguer::Error::IO(io_err)
                    if io_err.kind() == std::io::ErrorKind::Interrupted =>
                {
                    Err(UserCancelled.into())
                }
                other => Err(other.into()),
            }
        }
    }
}

/// Renders input prompts as `name> `, shell style.
struct PromptTheme;

impl Theme for PromptTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{prompt}> ")
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{prompt}> {sel}")
    }
}

/// Read one line from the terminal; an empty line is a valid answer.
pub fn prompt_line(name: &str) -> Result<String> {
    prompt_or_cancel(
        Input::<String>::with_theme(&PromptTheme)
            .with_prompt(name)
            .allow_empty(true)
            .interact_text(),
    )
}
