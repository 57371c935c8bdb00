use crate::{mail::OutgoingMail, submission::ContactSubmission};

pub fn subject_for(submission: &ContactSubmission) -> String {
    format!("Portfolio Contact: {}", submission.name)
}

/// Renders the notification body. User text is escaped before it is placed
/// into the markup.
pub fn html_body_for(submission: &ContactSubmission) -> String {
    let name = ammonia::clean_text(&submission.name);
    let email = ammonia::clean_text(&submission.email);
    let message = ammonia::clean_text(&submission.message);
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #a855f7;">New Contact Form Submission</h2>
  <div style="background: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Message:</strong></p>
    <p style="white-space: pre-wrap;">{message}</p>
  </div>
  <p style="color: #666; font-size: 12px;">This message was sent from your portfolio contact form.</p>
</div>
"#
    )
}

pub fn compose_mail(submission: &ContactSubmission) -> OutgoingMail {
    OutgoingMail {
        reply_to: submission.email.clone(),
        subject: subject_for(submission),
        html_body: html_body_for(submission),
    }
}
