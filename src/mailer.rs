//! SMTP delivery of reminder emails.

use crate::config::{EmailSettings, TlsMode};
use crate::error::{PlannerError, Result};
use crate::reminder::{ReminderMessage, ReminderSender};
use lettre::message::{Mailbox, Message, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};
use std::time::Duration;

pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a mailer from the `[email]` settings.
    ///
    /// `password` comes from the environment; with no `username` the relay
    /// is used without authentication.
    pub fn from_settings(settings: &EmailSettings, password: Option<String>) -> Result<Self> {
        let host = settings.smtp_host.as_deref().ok_or_else(|| {
            PlannerError::Config("email.smtp_host is not set".to_string())
        })?;
        let from = settings
            .from
            .as_deref()
            .ok_or_else(|| PlannerError::Config("email.from is not set".to_string()))?;
        let from: Mailbox = from.parse().map_err(|e| {
            PlannerError::Config(format!("invalid From address \"{from}\": {e}"))
        })?;

        let builder = match settings.tls {
            TlsMode::Starttls => SmtpTransport::starttls_relay(host),
            TlsMode::Implicit => SmtpTransport::relay(host),
            TlsMode::None => Ok(SmtpTransport::builder_dangerous(host)),
        }
        .map_err(|e| PlannerError::Config(format!("invalid SMTP host \"{host}\": {e}")))?;

        let mut builder = builder
            .port(settings.smtp_port)
            .timeout(Some(Duration::from_secs(settings.timeout_secs)));
        if let Some(username) = &settings.username {
            let password = password.ok_or_else(|| {
                PlannerError::Config(format!(
                    "email.username is set but {} is empty",
                    crate::config::SMTP_PASSWORD_ENV
                ))
            })?;
            builder = builder.credentials(Credentials::new(username.clone(), password));
        }

        tracing::debug!(host, port = settings.smtp_port, "Configured SMTP transport");
        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    fn build_message(&self, message: &ReminderMessage) -> Result<Message> {
        let to: Mailbox = message.recipient.parse().map_err(|e| {
            PlannerError::Dispatch(format!("invalid To address \"{}\": {e}", message.recipient))
        })?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| PlannerError::Dispatch(format!("failed to build message: {e}")))
    }
}

impl ReminderSender for SmtpMailer {
    fn send(&self, message: &ReminderMessage) -> Result<()> {
        let email = self.build_message(message)?;
        self.transport
            .send(&email)
            .map_err(|e| PlannerError::Dispatch(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> EmailSettings {
        EmailSettings {
            smtp_host: Some("localhost".to_string()),
            smtp_port: 2525,
            tls: TlsMode::None,
            from: Some("Study Planner <planner@example.com>".to_string()),
            username: None,
            timeout_secs: 1,
        }
    }

    #[test]
    fn test_requires_host_and_from() {
        let mut missing_host = settings();
        missing_host.smtp_host = None;
        assert!(matches!(
            SmtpMailer::from_settings(&missing_host, None),
            Err(PlannerError::Config(_))
        ));

        let mut missing_from = settings();
        missing_from.from = None;
        assert!(SmtpMailer::from_settings(&missing_from, None).is_err());
    }

    #[test]
    fn test_username_requires_password() {
        let mut with_user = settings();
        with_user.username = Some("planner".to_string());
        assert!(SmtpMailer::from_settings(&with_user, None).is_err());
        assert!(SmtpMailer::from_settings(&with_user, Some("secret".to_string())).is_ok());
    }

    #[test]
    fn test_bad_recipient_is_dispatch_error() {
        let mailer = SmtpMailer::from_settings(&settings(), None).unwrap();
        let message = ReminderMessage {
            recipient: "not an address".to_string(),
            subject: "Reminder: Essay due soon!".to_string(),
            body: "Hi".to_string(),
        };
        assert!(matches!(
            mailer.build_message(&message),
            Err(PlannerError::Dispatch(_))
        ));
    }

    #[test]
    fn test_builds_plain_text_message() {
        let mailer = SmtpMailer::from_settings(&settings(), None).unwrap();
        let message = ReminderMessage {
            recipient: "ada@example.com".to_string(),
            subject: "Reminder: Essay due soon!".to_string(),
            body: "Hi Ada,".to_string(),
        };
        let formatted = String::from_utf8(mailer.build_message(&message).unwrap().formatted())
            .unwrap();
        assert!(formatted.contains("To: ada@example.com"));
        assert!(formatted.contains("Subject: Reminder: Essay due soon!"));
        assert!(formatted.contains("Hi Ada,"));
    }
}
