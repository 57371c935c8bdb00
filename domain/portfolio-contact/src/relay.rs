use std::sync::Arc;

use log::{error, info};

use crate::{
    ContactError, ContactResult,
    compose::compose_mail,
    mail::{ArcMailPort, MailPort},
    submission::{ContactRequest, ContactSubmission},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent,
    /// No mail account is configured; the submission went to the log only.
    Logged,
}

pub struct ContactRelay {
    mailer: Option<ArcMailPort>,
}

impl ContactRelay {
    pub fn new(mailer: Option<ArcMailPort>) -> Self {
        Self { mailer }
    }

    pub fn with_mailer(mailer: impl MailPort + Send + Sync + 'static) -> Self {
        let mailer: ArcMailPort = Arc::new(mailer);
        Self {
            mailer: Some(mailer),
        }
    }

    pub fn without_mailer() -> Self {
        Self { mailer: None }
    }

    pub fn mail_configured(&self) -> bool {
        self.mailer.is_some()
    }

    pub async fn submit(&self, request: ContactRequest) -> ContactResult<DeliveryOutcome> {
        let submission = request.into_submission()?;
        self.deliver(&submission).await
    }

    async fn deliver(&self, submission: &ContactSubmission) -> ContactResult<DeliveryOutcome> {
        let Some(mailer) = &self.mailer else {
            info!("Contact form submission (development mode):");
            info!("Name: {}", submission.name);
            info!("Email: {}", submission.email);
            info!("Message: {}", submission.message);
            info!("---");
            return Ok(DeliveryOutcome::Logged);
        };

        let mail = compose_mail(submission);
        if let Err(e) = mailer.send_mail(mail).await {
            error!("Error sending email: {}", e);
            return Err(ContactError::Delivery(e));
        }
        info!("Contact email sent for {}", submission.email);
        Ok(DeliveryOutcome::Sent)
    }
}
