use crate::validation::Incomplete;
use thiserror::Error;

// Enum for handling every failure the rules engine can report.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error), // Errors related to data serialization.

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error), // Input/output errors from the storage backend.

    #[error("Malformed persisted state: {0}")]
    MalformedPersistedState(String), // Stored record parsed but breaks an invariant.

    #[error("Incomplete character: {0}")]
    IncompleteCharacter(#[from] Incomplete), // Finalization refused by the validation gate.

    #[error("Invalid dice shape: a die needs at least one side, got {0}")]
    InvalidDiceShape(i32),

    #[error("Score {0} is not available in the pool")]
    ScoreUnavailable(i32),

    #[error("Logger error: {0}")]
    Logger(String),
}

impl From<log::SetLoggerError> for AppError {
    fn from(error: log::SetLoggerError) -> Self {
        AppError::Logger(error.to_string())
    }
}
