use std::sync::{Arc, Mutex};

use thiserror::Error;

/// A message ready for dispatch. The recipient is always the relay's own
/// account, so it is left to the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMailError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("failed to build email: {0}")]
    Build(String),

    #[error("failed to send email: {0}")]
    Transport(String),
}

pub type ArcMailPort = Arc<dyn MailPort + Send + Sync + 'static>;

#[async_trait::async_trait]
pub trait MailPort {
    async fn send_mail(&self, mail: OutgoingMail) -> Result<(), SendMailError>;
}

#[derive(Clone, Default)]
pub struct MockMailPort {
    pub sent_mails: Arc<Mutex<Vec<OutgoingMail>>>,
    failure: Option<SendMailError>,
}

#[allow(unused)]
impl MockMailPort {
    pub fn failing(error: SendMailError) -> Self {
        Self {
            sent_mails: Arc::default(),
            failure: Some(error),
        }
    }

    pub fn get_mails(&self) -> Vec<OutgoingMail> {
        self.sent_mails.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MailPort for MockMailPort {
    async fn send_mail(&self, mail: OutgoingMail) -> Result<(), SendMailError> {
        self.sent_mails.lock().unwrap().push(mail);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}
