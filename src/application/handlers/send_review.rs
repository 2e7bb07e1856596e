//! SendReviewHandler - validates and relays review/feedback mail.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::info;

use crate::ports::{MailRelay, MailRelayError, OutboundMessage};

/// Default subject for relayed reviews.
pub const DEFAULT_SUBJECT: &str = "New Review Submitted on Learning Path Creator";

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex is valid")
});

/// Checks an address against `local@domain.tld` (TLD of at least two
/// letters, so `a@b` is rejected).
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Errors from a review relay attempt.
#[derive(Debug, Clone, Error)]
pub enum NotifyError {
    /// The supplied reviewer address is malformed; nothing was sent.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Configuration or transport failure from the relay.
    #[error(transparent)]
    Relay(#[from] MailRelayError),
}

impl NotifyError {
    /// True for errors that must halt the current operation.
    pub fn is_fatal(&self) -> bool {
        match self {
            NotifyError::InvalidEmail => false,
            NotifyError::Relay(e) => e.is_fatal(),
        }
    }
}

/// A review or feedback text to relay to the admin.
#[derive(Debug, Clone)]
pub struct SendReviewCommand {
    pub review: String,
    pub reviewer_email: Option<String>,
    pub subject: Option<String>,
}

impl SendReviewCommand {
    pub fn review(review: impl Into<String>, reviewer_email: Option<String>) -> Self {
        Self {
            review: review.into(),
            reviewer_email,
            subject: None,
        }
    }

    /// App feedback with a star rating, relayed through the same path.
    pub fn feedback(rating: u8, text: impl Into<String>) -> Self {
        Self {
            review: format!("App Rating: {}/5\nFeedback: {}", rating, text.into()),
            reviewer_email: None,
            subject: None,
        }
    }
}

/// Handler relaying reviews to the admin address.
pub struct SendReviewHandler {
    relay: Arc<dyn MailRelay>,
}

impl SendReviewHandler {
    pub fn new(relay: Arc<dyn MailRelay>) -> Self {
        Self { relay }
    }

    /// Validates the optional reviewer address and relays the message.
    ///
    /// An empty reviewer address counts as not provided. A supplied but
    /// invalid address aborts before any delivery attempt.
    pub async fn handle(&self, cmd: SendReviewCommand) -> Result<(), NotifyError> {
        let reviewer_email = cmd.reviewer_email.filter(|e| !e.is_empty());

        if let Some(email) = &reviewer_email {
            if !validate_email(email) {
                return Err(NotifyError::InvalidEmail);
            }
        }

        let body = format!(
            "A new review has been submitted:\n\nReview: {}\n\nUser Email: {}\n",
            cmd.review,
            reviewer_email.as_deref().unwrap_or("Not provided"),
        );

        let message = OutboundMessage {
            subject: cmd.subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            body,
        };

        self.relay.send(message).await?;
        info!("review relayed to admin");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockMailRelay {
        sent: Mutex<Vec<OutboundMessage>>,
        fail_with: Option<MailRelayError>,
    }

    impl MockMailRelay {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(error: MailRelayError) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with: Some(error),
            }
        }

        fn sent(&self) -> Vec<OutboundMessage> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MailRelay for MockMailRelay {
        async fn send(&self, message: OutboundMessage) -> Result<(), MailRelayError> {
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            self.sent.lock().unwrap().push(message);
            Ok(())
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Email validation
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn validate_accepts_plain_address() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("user.name+tag@sub.example.org"));
    }

    #[test]
    fn validate_rejects_garbage() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email(""));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn validate_rejects_missing_tld() {
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a@b.c"));
    }

    // ───────────────────────────────────────────────────────────────
    // Relay behavior
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn relays_review_with_default_subject() {
        let relay = Arc::new(MockMailRelay::new());
        let handler = SendReviewHandler::new(relay.clone());

        handler
            .handle(SendReviewCommand::review("Great book", None))
            .await
            .unwrap();

        let sent = relay.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, DEFAULT_SUBJECT);
        assert!(sent[0].body.contains("Review: Great book"));
        assert!(sent[0].body.contains("User Email: Not provided"));
    }

    #[tokio::test]
    async fn includes_reviewer_email_when_provided() {
        let relay = Arc::new(MockMailRelay::new());
        let handler = SendReviewHandler::new(relay.clone());

        handler
            .handle(SendReviewCommand::review(
                "Loved it",
                Some("reader@example.com".to_string()),
            ))
            .await
            .unwrap();

        assert!(relay.sent()[0].body.contains("User Email: reader@example.com"));
    }

    #[tokio::test]
    async fn empty_reviewer_email_counts_as_not_provided() {
        let relay = Arc::new(MockMailRelay::new());
        let handler = SendReviewHandler::new(relay.clone());

        handler
            .handle(SendReviewCommand::review("ok", Some(String::new())))
            .await
            .unwrap();

        assert!(relay.sent()[0].body.contains("User Email: Not provided"));
    }

    #[tokio::test]
    async fn invalid_email_aborts_before_sending() {
        let relay = Arc::new(MockMailRelay::new());
        let handler = SendReviewHandler::new(relay.clone());

        let result = handler
            .handle(SendReviewCommand::review(
                "text",
                Some("not-an-email".to_string()),
            ))
            .await;

        assert!(matches!(result, Err(NotifyError::InvalidEmail)));
        assert!(relay.sent().is_empty());
    }

    #[tokio::test]
    async fn missing_credentials_surface_as_fatal() {
        let relay = Arc::new(MockMailRelay::failing(MailRelayError::NotConfigured(
            "email.address",
        )));
        let handler = SendReviewHandler::new(relay);

        let err = handler
            .handle(SendReviewCommand::review("text", None))
            .await
            .unwrap_err();

        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn transport_failure_is_recoverable() {
        let relay = Arc::new(MockMailRelay::failing(MailRelayError::Transport(
            "connection refused".to_string(),
        )));
        let handler = SendReviewHandler::new(relay);

        let err = handler
            .handle(SendReviewCommand::review("text", None))
            .await
            .unwrap_err();

        assert!(!err.is_fatal());
    }

    #[tokio::test]
    async fn feedback_command_formats_rating_body() {
        let relay = Arc::new(MockMailRelay::new());
        let handler = SendReviewHandler::new(relay.clone());

        handler
            .handle(SendReviewCommand::feedback(4, "Very helpful"))
            .await
            .unwrap();

        assert!(relay.sent()[0]
            .body
            .contains("App Rating: 4/5\nFeedback: Very helpful"));
    }
}
