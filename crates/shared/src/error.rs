use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("missing field")]
    MissingField,
    #[error("bad email format")]
    BadEmailFormat,
}

impl ValidationFailure {
    /// Text returned to the submitter in the `error` field.
    pub fn public_message(self) -> &'static str {
        match self {
            Self::MissingField => "All fields are required",
            Self::BadEmailFormat => "Invalid email format",
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    #[error("validation failure: {0}")]
    Validation(#[from] ValidationFailure),
    /// Anything unexpected while handling the request. The detail stays in
    /// the server log.
    #[error("delivery failure: {detail}")]
    Delivery { detail: String },
}

impl SubmissionError {
    pub fn delivery(detail: impl Into<String>) -> Self {
        Self::Delivery {
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::Validation,
            Self::Delivery { .. } => ErrorCode::Internal,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Validation(failure) => failure.public_message(),
            Self::Delivery { .. } => "Failed to send message",
        }
    }
}
