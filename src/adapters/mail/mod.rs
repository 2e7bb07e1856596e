//! Mail adapters implementing the `MailRelay` port.

mod smtp_relay;

pub use smtp_relay::SmtpMailRelay;
