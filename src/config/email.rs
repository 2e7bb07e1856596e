//! Email configuration (SMTP submission)

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration for the outbound mail relay.
///
/// Reviews and feedback are relayed to the configured sender address, which
/// doubles as the admin (receiver) address. Credentials may be absent: the
/// app runs without them, and sending fails with a configuration error.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP submission host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP submission port (STARTTLS)
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Sender (and admin receiver) address
    #[serde(default)]
    pub address: String,

    /// SMTP password for the sender address
    #[serde(default = "default_password")]
    pub password: SecretString,
}

impl EmailConfig {
    /// Both credentials are present, so sending can be attempted.
    pub fn is_configured(&self) -> bool {
        !self.address.is_empty() && !self.password.expose_secret().is_empty()
    }

    /// Validate email configuration.
    ///
    /// Absent credentials are allowed; present values must be plausible.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.smtp_host.is_empty() {
            return Err(ValidationError::InvalidSmtpHost);
        }
        if !self.address.is_empty() && !self.address.contains('@') {
            return Err(ValidationError::InvalidSenderEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            address: String::new(),
            password: default_password(),
        }
    }
}

fn default_smtp_host() -> String {
    "smtp.gmail.com".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_password() -> SecretString {
    SecretString::new(String::new())
}
