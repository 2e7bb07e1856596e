//! SMTP Mail Relay Adapter
//!
//! Delivers review and feedback mail through an SMTP submission server
//! (STARTTLS on port 587 by default). The configured sender address is
//! also the receiver, so mail loops back to the admin inbox.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use tracing::debug;

use crate::config::EmailConfig;
use crate::ports::{MailRelay, MailRelayError, OutboundMessage};

/// SMTP-backed mail relay
pub struct SmtpMailRelay {
    config: EmailConfig,
}

impl SmtpMailRelay {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    fn mailbox(&self) -> Result<Mailbox, MailRelayError> {
        self.config
            .address
            .parse()
            .map_err(|_| MailRelayError::NotConfigured("email.address"))
    }
}

#[async_trait]
impl MailRelay for SmtpMailRelay {
    async fn send(&self, message: OutboundMessage) -> Result<(), MailRelayError> {
        if self.config.address.is_empty() {
            return Err(MailRelayError::NotConfigured("email.address"));
        }
        if self.config.password.expose_secret().is_empty() {
            return Err(MailRelayError::NotConfigured("email.password"));
        }

        let mailbox = self.mailbox()?;
        let email = Message::builder()
            .from(mailbox.clone())
            .to(mailbox)
            .subject(&message.subject)
            .body(message.body)
            .map_err(|e| MailRelayError::Transport(e.to_string()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(
            &self.config.smtp_host,
        )
        .map_err(|e| MailRelayError::Transport(e.to_string()))?
        .port(self.config.smtp_port)
        .credentials(Credentials::new(
            self.config.address.clone(),
            self.config.password.expose_secret().to_string(),
        ))
        .build();

        transport
            .send(email)
            .await
            .map_err(|e| MailRelayError::Transport(e.to_string()))?;

        debug!(host = %self.config.smtp_host, "mail submitted");
        Ok(())
    }
}
