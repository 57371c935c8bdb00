use thiserror::Error;

pub mod compose;
pub mod mail;
pub mod relay;
pub mod submission;
pub mod validation;

pub use mail::{MailPort, OutgoingMail, SendMailError};
pub use relay::{ContactRelay, DeliveryOutcome};
pub use submission::{ContactRequest, ContactSubmission};
pub use validation::ValidationError;

#[derive(Debug, Clone, Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("delivery failed: {0}")]
    Delivery(#[from] SendMailError),
}

pub type ContactResult<T> = Result<T, ContactError>;
