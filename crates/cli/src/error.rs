// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] bool_tally_engine::error::EngineError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] rustyline::error::ReadlineError),

    #[error("No file selected")]
    NoFileSelected,
}

pub type Result<T> = std::result::Result<T, AppError>;
