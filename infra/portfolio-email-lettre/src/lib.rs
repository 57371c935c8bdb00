use std::str::FromStr;

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use log::warn;
use portfolio_contact::{MailPort, OutgoingMail, SendMailError};

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub user: String,
    pub password: String,
}

/// Delivers contact mail through an authenticated SMTP relay. The account
/// used to log in is both sender and recipient.
pub struct LettreMailAdapter {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    account: Mailbox,
}

impl LettreMailAdapter {
    pub fn new(settings: &SmtpSettings) -> Result<Self, SendMailError> {
        let account = Mailbox::from_str(&settings.user)
            .map_err(|e| SendMailError::InvalidAddress(format!("{}: {}", settings.user, e)))?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
            .map_err(|e| {
                SendMailError::Transport(format!("Failed to create SMTP transport: {}", e))
            })?
            .credentials(Credentials::new(
                settings.user.clone(),
                settings.password.clone(),
            ))
            .build();
        Ok(Self { transport, account })
    }

    pub fn build_message(&self, mail: &OutgoingMail) -> Result<Message, SendMailError> {
        let mut builder = Message::builder()
            .from(self.account.clone())
            .to(self.account.clone())
            .subject(mail.subject.as_str())
            .header(ContentType::TEXT_HTML);
        // The relay only checks a loose address shape, so a reply-to that
        // lettre cannot parse is dropped rather than failing the send.
        match Mailbox::from_str(&mail.reply_to) {
            Ok(reply_to) => builder = builder.reply_to(reply_to),
            Err(e) => warn!("Dropping unparsable reply-to {:?}: {}", mail.reply_to, e),
        }
        builder
            .body(mail.html_body.clone())
            .map_err(|e| SendMailError::Build(e.to_string()))
    }
}

#[async_trait::async_trait]
impl MailPort for LettreMailAdapter {
    async fn send_mail(&self, mail: OutgoingMail) -> Result<(), SendMailError> {
        let message = self.build_message(&mail)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| SendMailError::Transport(e.to_string()))?;
        Ok(())
    }
}
