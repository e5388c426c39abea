//! Shared command helpers.

use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::CliError;

/// Ask for confirmation before an outward-facing action.
///
/// `--yes` short-circuits; in a non-interactive context the action is
/// refused instead of silently proceeding.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, CliError> {
    if assume_yes {
        return Ok(true);
    }

    if !io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: prompt.to_owned(),
        });
    }

    eprint!("{prompt} [y/N] ");
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
