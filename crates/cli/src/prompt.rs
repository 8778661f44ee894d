use crate::error::{AppError, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;

const PROMPT: &str = "CSV file to analyse: ";

/// Ask for a file path on the terminal.
///
/// # Errors
/// Returns [`AppError::NoFileSelected`] when the user enters nothing,
/// interrupts the prompt or closes input.
pub fn ask_for_path() -> Result<PathBuf> {
    let mut rl = DefaultEditor::new()?;
    match rl.readline(PROMPT) {
        Ok(line) => parse_answer(&line).ok_or(AppError::NoFileSelected),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Err(AppError::NoFileSelected),
        Err(err) => Err(err.into()),
    }
}

/// Trim the answer and drop quotes added by terminal drag-and-drop.
fn parse_answer(line: &str) -> Option<PathBuf> {
    let trimmed = line.trim();
    let unquoted = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(trimmed);

    (!unquoted.is_empty()).then(|| PathBuf::from(unquoted))
}
