use std::io::{IsTerminal, Read, stdin};

use anyhow::{Context, Result};

use crate::ui::interaction::prompt_line;

/// Resolve the payload from the argument, piped stdin, or a prompt.
///
/// An explicit argument always wins, even when it is empty.
pub fn read_payload(explicit: Option<String>) -> Result<String> {
    if let Some(payload) = explicit {
        tracing::debug!("payload taken from argument");
        return Ok(payload);
    }

    let input = stdin();
    if !input.is_terminal() {
        tracing::debug!("reading payload from piped stdin");
        return read_piped(input.lock());
    }

    tracing::debug!("prompting for payload");
    prompt_line("payload")
}

/// Read a whole stream and drop one trailing newline.
///
/// Bytes that are not UTF-8 become U+FFFD.
pub fn read_piped<R: Read>(mut reader: R) -> Result<String> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .context("failed to read payload from stdin")?;
    Ok(strip_trailing_newline(
        String::from_utf8_lossy(&buf).into_owned(),
    ))
}

/// `\r\n` counts as a single newline.
pub fn strip_trailing_newline(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}
