use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    #[error("Day index out of range: {0} (expected 0-6)")]
    DayOutOfRange(usize),

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
}

pub type Result<T> = std::result::Result<T, PlannerError>;
