use thiserror::Error;

/// Input validation failures raised while counting.
///
/// Both variants are terminal for the invocation that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    #[error("CSV file is empty")]
    EmptyInput,

    #[error("No boolean columns found")]
    NoBooleanColumns,
}

pub type Result<T> = core::result::Result<T, TallyError>;
