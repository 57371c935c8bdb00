use portfolio_contact::{ContactSubmission, validation::is_valid_email};
use thiserror::Error;

use crate::api::{ClientError, ContactApi, ServerReply};

pub const SUCCESS_MESSAGE: &str = "Message sent! I'll respond soon.";
pub const REJECTED_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";
pub const NETWORK_FAILURE_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Success(msg) | FormStatus::Error(msg) => Some(msg.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Name is required")]
    NameRequired,

    #[error("Valid email required")]
    InvalidEmail,

    #[error("Message is required")]
    MessageRequired,
}

/// State behind the contact form: field values, the status line under the
/// form, and whether the submit button is disabled.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    status: FormStatus,
    is_submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
        if self.status.message().is_some() {
            self.status = FormStatus::Idle;
        }
    }

    pub fn validate(&self) -> Result<ContactSubmission, FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::NameRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MessageRequired);
        }
        Ok(ContactSubmission::new(
            self.name.clone(),
            self.email.clone(),
            self.message.clone(),
        ))
    }

    /// Validates and marks the form as submitting. Returns `None` when a
    /// request is already outstanding or a field is invalid, in which case no
    /// request must be sent.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_submitting {
            return None;
        }
        match self.validate() {
            Ok(submission) => {
                self.is_submitting = true;
                self.status = FormStatus::Idle;
                Some(submission)
            }
            Err(e) => {
                self.status = FormStatus::Error(e.to_string());
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<ServerReply, ClientError>) {
        self.is_submitting = false;
        self.status = match result {
            Ok(_) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                FormStatus::Success(SUCCESS_MESSAGE.to_string())
            }
            Err(ClientError::Rejected { message, .. }) => FormStatus::Error(
                message
                    .filter(|msg| !msg.is_empty())
                    .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string()),
            ),
            Err(ClientError::Request(_) | ClientError::Serde(_)) => {
                FormStatus::Error(NETWORK_FAILURE_MESSAGE.to_string())
            }
        };
    }

    pub async fn submit<A>(&mut self, api: &A)
    where
        A: ContactApi + Sync + ?Sized,
    {
        let Some(submission) = self.begin_submit() else {
            return;
        };
        let result = api.submit_contact(&submission).await;
        self.finish_submit(result);
    }
}
