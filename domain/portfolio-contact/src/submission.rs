use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{EMAIL_PATTERN, ValidationError, validate_message_length};

/// A contact form payload as it arrives on the wire. Every field may be
/// missing; nothing is trusted until [`ContactRequest::into_submission`] ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    pub name: String,
    #[validate(regex(path = *EMAIL_PATTERN))]
    pub email: String,
    #[validate(custom(function = validate_message_length))]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl ContactRequest {
    /// Applies the relay's rules in order; the first one that fails decides
    /// the error.
    pub fn into_submission(self) -> Result<ContactSubmission, ValidationError> {
        let (Some(name), Some(email), Some(message)) = (
            present(self.name),
            present(self.email),
            present(self.message),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        let submission = ContactSubmission {
            name,
            email,
            message,
        };
        if let Err(errors) = submission.validate() {
            let fields = errors.field_errors();
            if fields.contains_key("email") {
                return Err(ValidationError::InvalidEmail);
            }
            return Err(ValidationError::MessageTooShort);
        }
        Ok(submission)
    }
}

impl From<ContactSubmission> for ContactRequest {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            name: Some(submission.name),
            email: Some(submission.email),
            message: Some(submission.message),
        }
    }
}
