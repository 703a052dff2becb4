use thiserror::Error;

use crate::models::ValidationReport;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid input: {0}")]
    InvalidInput(ValidationReport),

    #[error("Missing data: {0}")]
    MissingData(String),

    #[error("A meal plan is already being generated")]
    GenerationInProgress,

    #[error("The meal plan has already been generated; reset the wizard to start over")]
    AlreadyGenerated,

    #[error("Meal plan generation was cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<ValidationReport> for PlannerError {
    fn from(report: ValidationReport) -> Self {
        PlannerError::InvalidInput(report)
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
