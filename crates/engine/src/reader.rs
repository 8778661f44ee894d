use crate::error::{EngineError, Result};
use bool_tally_core::Dataset;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read every line of `path`.
///
/// The handle is dropped on every return path, including a read failure
/// part-way through the file.
///
/// # Errors
/// Returns [`EngineError::FileRead`] if the file cannot be opened or a line
/// cannot be read (including invalid UTF-8).
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file_read = |source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_read)?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(file_read)
}

/// Read and parse `path` into a [`Dataset`].
///
/// # Errors
/// Returns [`EngineError::FileRead`] on I/O failure, or
/// [`EngineError::Tally`] wrapping `EmptyInput` for a file with no lines.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let lines = read_lines(path)?;
    Ok(Dataset::from_lines(lines)?)
}
