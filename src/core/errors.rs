use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize, PartialEq, Eq)]
pub enum SplitSmartError {
    #[error("Participant {0} already exists")]
    ParticipantAlreadyExists(String),
    #[error("Participant {0} not found")]
    ParticipantNotFound(String),
    #[error("Participant {0} is not part of the session")]
    UnknownParticipant(String),
    #[error("Add participants first")]
    NoParticipants,
    #[error("Transaction {0} not found")]
    TransactionNotFound(String),
    #[error("At least one contributor is required")]
    NoContributors,
    #[error("At least one beneficiary is required")]
    NoBeneficiaries,
    #[error("Unknown result mode: {0}")]
    UnknownResultMode(String),
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Internal consistency violation: {0}")]
    InvariantViolation(String),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Logging error: {0}")]
    LoggingError(String),
    #[error("Cache error: {0}")]
    CacheError(String),
}

impl SplitSmartError {
    pub fn invalid_input(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        SplitSmartError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: title.into(),
                description: description.into(),
            },
        )
    }
}
