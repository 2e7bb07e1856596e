//! Port for the outbound mail relay.

use async_trait::async_trait;
use thiserror::Error;

/// A composed message ready for delivery to the admin address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub subject: String,
    pub body: String,
}

/// Errors from a send attempt.
#[derive(Debug, Clone, Error)]
pub enum MailRelayError {
    /// Credentials are absent from configuration. Fatal for the current
    /// operation: the caller must halt rather than retry.
    #[error("Missing configuration: {0}. Check the email settings.")]
    NotConfigured(&'static str),

    /// The relay rejected the attempt or was unreachable. Recoverable:
    /// reported to the user, the operation otherwise continues.
    #[error("Failed to send email: {0}")]
    Transport(String),
}

impl MailRelayError {
    /// True for errors that must halt the current operation.
    pub fn is_fatal(&self) -> bool {
        matches!(self, MailRelayError::NotConfigured(_))
    }
}

/// Delivers messages to the fixed admin address.
///
/// Delivery is synchronous from the caller's perspective: success or failure
/// is the whole contract, with no retry or timeout in this design.
#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<(), MailRelayError>;
}
