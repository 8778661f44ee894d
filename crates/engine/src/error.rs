use bool_tally_core::TallyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Tally(#[from] TallyError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<crate::config::ConfigBuilderError> for EngineError {
    fn from(e: crate::config::ConfigBuilderError) -> Self {
        Self::Config(e.to_string())
    }
}

impl EngineError {
    /// The counting error behind this failure, if any.
    #[must_use]
    pub const fn tally(&self) -> Option<&TallyError> {
        match self {
            Self::Tally(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
