use thiserror::Error;

#[derive(Debug, Error)]
pub enum MessError {
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    #[error("A submission is already in flight")]
    SubmitInProgress,
}

pub type Result<T> = std::result::Result<T, MessError>;
