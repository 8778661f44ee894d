use bool_tally_core::Tally;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of one engine run, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// File name shown to the user (last path component).
    pub file_name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub tally: Tally,
}

impl Report {
    #[must_use]
    pub fn new(path: &Path, tally: Tally) -> Self {
        let file_name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Self {
            file_name,
            path: path.to_path_buf(),
            tally,
        }
    }
}
