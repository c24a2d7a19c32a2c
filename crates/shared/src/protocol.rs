use serde::{Deserialize, Serialize};

use crate::{
    domain::{Acknowledgement, ContactMessage},
    error::{SubmissionError, ValidationFailure},
};

pub const CONTACT_ROUTE: &str = "/api/contact";

/// Body of `POST /api/contact`. Fields are optional on the wire so that an
/// absent key, `null` and `""` all end up as the same missing-field failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactPayload {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            message: Some(message.into()),
        }
    }

    pub fn validate(self) -> Result<ContactMessage, ValidationFailure> {
        match (self.name, self.email, self.message) {
            (Some(name), Some(email), Some(message)) => ContactMessage::new(name, email, message),
            _ => Err(ValidationFailure::MissingField),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedResponse {
    pub message: String,
}

impl From<Acknowledgement> for AcceptedResponse {
    fn from(value: Acknowledgement) -> Self {
        Self {
            message: value.message().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&SubmissionError> for ErrorResponse {
    fn from(value: &SubmissionError) -> Self {
        Self {
            error: value.public_message().to_string(),
        }
    }
}
